#[macro_export]
/// Trigger panic during board initialization
macro_rules! panic_init {
    ($fmt: literal $(, $($arg: tt)+)?) => {
        panic!(
            concat!("An unexpected error occurred during board initialization:\n\t",$fmt)
             $(, $($arg)+)?)
    }
}
