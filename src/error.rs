use std::fmt::{Debug, Display};
pub struct GrayError(pub String);

impl Display for GrayError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl Debug for GrayError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("GrayError").field(&self.0).finish()
    }
}

impl std::error::Error for GrayError {}

#[macro_export]
macro_rules! wg_err {
    ($fmt:literal $(, $($arg:tt)*)?) => {
        $crate::wg_err!(format!($fmt $(, $($arg)*)?))
    };
    ($msg:expr) => {
        $crate::error::GrayError(format!(
            "wondergray: {} @ {}:{}:{}",
            $msg,
            file!(),
            line!(),
            column!()
        ))
    };
}

#[macro_export]
macro_rules! wg_try {
    ($expr:expr $(,)?) => {
        match $expr {
            std::result::Result::Ok(val) => val,
            std::result::Result::Err(err) => {
                return std::result::Result::Err($crate::wg_err!(err));
            }
        }
    };
}
