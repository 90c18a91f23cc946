//! Early console output.
//!
//! The board installs a single [ConsoleOut] sink once; everything printed before that is dropped.
use core::fmt::{Arguments, Error, Write};
use spin::Once;

/// Byte sink backing the early console, e.g. a polled UART.
pub trait ConsoleOut: Sync {
    fn put_str(&self, s: &str) -> Result<(), Error>;
}

static CONSOLE: Once<&'static dyn ConsoleOut> = Once::new();

/// Install the console sink. Return `false` if one was already installed.
pub fn set_console(out: &'static dyn ConsoleOut) -> bool {
    let mut installed = false;
    CONSOLE.call_once(|| {
        installed = true;
        out
    });
    installed
}

struct SerialOut(&'static dyn ConsoleOut);

impl Write for SerialOut {
    fn write_str(&mut self, s: &str) -> core::fmt::Result {
        self.0.put_str(s)
    }
}

pub fn serial_print(args: Arguments) {
    if let Some(out) = CONSOLE.get() {
        // Nothing sensible to do with a failing console this early.
        let _ = SerialOut(*out).write_fmt(args);
    }
}

#[macro_export]
/// print string macro
macro_rules! kserial_print {
    ($fmt: literal $(, $($arg: tt)+)?) => {
        $crate::console::serial_print(format_args!($fmt $(, $($arg)+)?));
    }
}

#[macro_export]
macro_rules! kserial_println {
    ($fmt: literal $(, $($arg: tt)+)?) => {
        $crate::console::serial_print(format_args!(concat!($fmt, "\n") $(, $($arg)+)?));   // Use LF instead of CR-LF
    }
}
