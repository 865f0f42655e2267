/*-
 * Pwdhash-rs - a password hashing library
 * Copyright (C) 2021  Aleksandr Morozov, RELKOM s.r.o
 * Copyright (C) 2021-2022  Aleksandr Morozov
 *
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 *  file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use super::hasher_error::HasherResult;

pub trait PasswordHashing
{
    /// A function which hashes the password using the hash function and
    /// returns the encoded textual form. For the crypt(3) family the salt
    /// is generated by the delegate library.
    fn hash(password: &[u8]) -> HasherResult<String>;
}

/// Implemented by the providers whose output format carries a caller
/// provided salt. Same (salt, password) always produces the same output.
pub trait SaltedPasswordHashing : PasswordHashing
{
    /// A function which hashes the password with the caller provided salt.
    fn hash_with(salt: &str, password: &[u8]) -> HasherResult<String>;
}
