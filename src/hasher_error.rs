/*-
 * Pwdhash-rs - a password hashing library
 * Copyright (C) 2021  Aleksandr Morozov
 *
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 *  file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::fmt;

pub struct HasherRuntimeError
{
    err_code: HasherErrorCode,
    message: String,
}

impl HasherRuntimeError
{
    pub fn new(err_code: HasherErrorCode, msg: String) -> Self
    {
        return HasherRuntimeError{err_code: err_code, message: msg};
    }

    pub fn get_err_code(&self) -> HasherErrorCode
    {
        return self.err_code;
    }
}

impl fmt::Display for HasherRuntimeError
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result
    {
        write!(f, "pwdhash: {}, {}", self.err_code, self.message)
    }
}
impl fmt::Debug for HasherRuntimeError
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result
    {
        write!(f, "pwdhash: {}, {}", self.err_code, self.message)
    }
}


#[derive(Debug, PartialEq, Clone, Copy)]
pub enum HasherErrorCode
{
    UnsupportedAlgorithm,
    DelegateFailure,
    EncodingFailure,
    FeatureNotSupported,
}

impl fmt::Display for HasherErrorCode
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result
    {
        match *self
        {
            Self::UnsupportedAlgorithm => write!(f, "Unsupported Algorithm"),
            Self::DelegateFailure => write!(f, "Delegate Library Failure"),
            Self::EncodingFailure => write!(f, "Text Encoding Failure"),
            Self::FeatureNotSupported => write!(f, "Feature is not supported"),
        }
    }
}

pub type HasherResult<T> = Result<T, HasherRuntimeError>;

#[macro_export]
macro_rules! hasher_error
{
    ($src:expr,$($arg:tt)*) => (
        return std::result::Result::Err(HasherRuntimeError::new($src, format!($($arg)*)))
    )
}

#[macro_export]
macro_rules! hasher_error_map
{
    ($src:expr,$($arg:tt)*) => (
        HasherRuntimeError::new($src, format!($($arg)*))
    )
}
