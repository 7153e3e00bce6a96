pub trait StrExt: AsRef<str> {
    fn nonblank_to_some(&self) -> Option<String> {
        Some(self.as_ref().trim())
            .filter(|s| !s.is_empty())
            .map(str::to_owned)
    }

    fn is_blank(&self) -> bool {
        self.as_ref().trim().is_empty()
    }

    fn contains_ignore_case(&self, lowercase_needle: &str) -> bool {
        self.as_ref().to_lowercase().contains(lowercase_needle)
    }
}

impl<T: AsRef<str>> StrExt for T {}

// https://github.com/rust-lang/rust/issues/130113
pub fn send_fut_lifetime_workaround<F: Future + Send>(
    fut: F,
) -> impl Future<Output=F::Output> + Send {
    fut
}

#[macro_export]
macro_rules! error_exit {
    ($($arg:tt)+) => ({
        ::log::error!($($arg)+);
        ::std::process::exit(1)
    });
}
