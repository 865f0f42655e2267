/*-
 * Pwdhash-rs - a password hashing library
 * Copyright (C) 2021  Aleksandr Morozov, RELKOM s.r.o
 * Copyright (C) 2021-2022  Aleksandr Morozov
 *
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 *  file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use pwhash::{sha512_crypt, sha256_crypt, md5_crypt, apr1_crypt, bcrypt, HashSetup};
use pwhash::bcrypt::{BcryptSetup, BcryptVariant};

use crate::{PasswordHashing, SaltedPasswordHashing, HasherResult, HasherRuntimeError,
    HasherErrorCode, HasherCommon, hasher_error_map};

/// A [PasswordHashing] provider which generates the crypt(3) SHA-512 ($6$)
/// password hash based on the pwhash delegate.
pub struct HashSha512Crypt;

impl PasswordHashing for HashSha512Crypt
{
    fn hash(password: &[u8]) -> HasherResult<String>
    {
        let res =
            sha512_crypt::hash(password)
                .map_err(|e|
                    hasher_error_map!(HasherErrorCode::DelegateFailure,
                        "sha512_crypt::hash() err, {}", e)
                )?;

        return Ok(res);
    }
}

impl SaltedPasswordHashing for HashSha512Crypt
{
    fn hash_with(salt: &str, password: &[u8]) -> HasherResult<String>
    {
        let res =
            sha512_crypt::hash_with(HashSetup{salt: Some(salt), rounds: None}, password)
                .map_err(|e|
                    hasher_error_map!(HasherErrorCode::DelegateFailure,
                        "sha512_crypt::hash_with() err, {}", e)
                )?;

        return Ok(res);
    }
}

/// A [PasswordHashing] provider which generates the crypt(3) SHA-256 ($5$)
/// password hash based on the pwhash delegate.
pub struct HashSha256Crypt;

impl PasswordHashing for HashSha256Crypt
{
    fn hash(password: &[u8]) -> HasherResult<String>
    {
        let res =
            sha256_crypt::hash(password)
                .map_err(|e|
                    hasher_error_map!(HasherErrorCode::DelegateFailure,
                        "sha256_crypt::hash() err, {}", e)
                )?;

        return Ok(res);
    }
}

impl SaltedPasswordHashing for HashSha256Crypt
{
    fn hash_with(salt: &str, password: &[u8]) -> HasherResult<String>
    {
        let res =
            sha256_crypt::hash_with(HashSetup{salt: Some(salt), rounds: None}, password)
                .map_err(|e|
                    hasher_error_map!(HasherErrorCode::DelegateFailure,
                        "sha256_crypt::hash_with() err, {}", e)
                )?;

        return Ok(res);
    }
}

/// A [PasswordHashing] provider which generates the crypt(3) MD5 ($1$)
/// password hash based on the pwhash delegate.
pub struct HashMd5Crypt;

impl PasswordHashing for HashMd5Crypt
{
    fn hash(password: &[u8]) -> HasherResult<String>
    {
        let res =
            md5_crypt::hash(password)
                .map_err(|e|
                    hasher_error_map!(HasherErrorCode::DelegateFailure,
                        "md5_crypt::hash() err, {}", e)
                )?;

        return Ok(res);
    }
}

impl SaltedPasswordHashing for HashMd5Crypt
{
    fn hash_with(salt: &str, password: &[u8]) -> HasherResult<String>
    {
        let res =
            md5_crypt::hash_with(HashSetup{salt: Some(salt), rounds: None}, password)
                .map_err(|e|
                    hasher_error_map!(HasherErrorCode::DelegateFailure,
                        "md5_crypt::hash_with() err, {}", e)
                )?;

        return Ok(res);
    }
}

/// A [PasswordHashing] provider which generates the Apache APR1 ($apr1$)
/// password hash based on the pwhash delegate.
pub struct HashApr1Crypt;

impl PasswordHashing for HashApr1Crypt
{
    fn hash(password: &[u8]) -> HasherResult<String>
    {
        let res =
            apr1_crypt::hash(password)
                .map_err(|e|
                    hasher_error_map!(HasherErrorCode::DelegateFailure,
                        "apr1_crypt::hash() err, {}", e)
                )?;

        return Ok(res);
    }
}

impl SaltedPasswordHashing for HashApr1Crypt
{
    fn hash_with(salt: &str, password: &[u8]) -> HasherResult<String>
    {
        let res =
            apr1_crypt::hash_with(HashSetup{salt: Some(salt), rounds: None}, password)
                .map_err(|e|
                    hasher_error_map!(HasherErrorCode::DelegateFailure,
                        "apr1_crypt::hash_with() err, {}", e)
                )?;

        return Ok(res);
    }
}

/// A [PasswordHashing] provider which generates the bcrypt ($2a$) password
/// hash based on the pwhash delegate. The salt is generated by the delegate
/// on every call and is embedded in the output.
pub struct HashBcrypt;

impl PasswordHashing for HashBcrypt
{
    fn hash(password: &[u8]) -> HasherResult<String>
    {
        let setup =
            BcryptSetup
            {
                salt: None,
                cost: Some(HasherCommon::BCRYPT_DEFAULT_COST),
                variant: Some(BcryptVariant::V2a),
            };

        let res =
            bcrypt::hash_with(setup, password)
                .map_err(|e|
                    hasher_error_map!(HasherErrorCode::DelegateFailure,
                        "bcrypt::hash_with() err, {}", e)
                )?;

        return Ok(res);
    }
}


#[test]
fn sha512_crypt_reference_vector()
{
    // reference vector from the SHA-crypt specification
    let res = HashSha512Crypt::hash_with("saltstring", b"Hello world!");

    assert_eq!(res.is_ok(), true);
    assert_eq!(res.unwrap(),
        "$6$saltstring$svn8UoSVapNtMuq1ukKS4tPQd8iKwSMHWjl/O817G3uBnIFNjnQJuesI68u4OTLiBFdcbYEdFCoEOfaS35inz1");
}

#[test]
fn sha256_crypt_reference_vector()
{
    let res = HashSha256Crypt::hash_with("saltstring", b"Hello world!");

    assert_eq!(res.is_ok(), true);
    assert_eq!(res.unwrap(),
        "$5$saltstring$5B8vYYiY.CVt1RlTTf8KbXBH3hsxY/GNooZaBBGWEc5");
}

#[test]
fn sha512_crypt_generated_salt_verifies()
{
    let res = HashSha512Crypt::hash(b"pencil");
    assert_eq!(res.is_ok(), true);

    let hash = res.unwrap();
    assert_eq!(hash.starts_with("$6$"), true);
    assert_eq!(pwhash::sha512_crypt::verify(b"pencil", hash.as_str()), true);
    assert_eq!(pwhash::sha512_crypt::verify(b"pencils", hash.as_str()), false);
}

#[test]
fn sha256_crypt_generated_salt_verifies()
{
    let hash = HashSha256Crypt::hash(b"pencil").unwrap();

    assert_eq!(hash.starts_with("$5$"), true);
    assert_eq!(pwhash::sha256_crypt::verify(b"pencil", hash.as_str()), true);
}

#[test]
fn md5_crypt_fixed_salt_is_deterministic()
{
    let h1 = HashMd5Crypt::hash_with("saltsalt", b"pencil").unwrap();
    let h2 = HashMd5Crypt::hash_with("saltsalt", b"pencil").unwrap();

    assert_eq!(h1, h2);
    assert_eq!(h1.starts_with("$1$saltsalt$"), true);
    assert_eq!(pwhash::md5_crypt::verify(b"pencil", h1.as_str()), true);
}

#[test]
fn apr1_crypt_fixed_salt_is_deterministic()
{
    let h1 = HashApr1Crypt::hash_with("saltsalt", b"pencil").unwrap();
    let h2 = HashApr1Crypt::hash_with("saltsalt", b"pencil").unwrap();

    assert_eq!(h1, h2);
    assert_eq!(h1.starts_with("$apr1$saltsalt$"), true);
    assert_eq!(pwhash::apr1_crypt::verify(b"pencil", h1.as_str()), true);
}

#[test]
fn crypt_family_accepts_empty_password()
{
    let hash = HashSha512Crypt::hash(b"").unwrap();
    assert_eq!(pwhash::sha512_crypt::verify(b"", hash.as_str()), true);

    let hash = HashSha256Crypt::hash(b"").unwrap();
    assert_eq!(pwhash::sha256_crypt::verify(b"", hash.as_str()), true);

    let hash = HashMd5Crypt::hash(b"").unwrap();
    assert_eq!(pwhash::md5_crypt::verify(b"", hash.as_str()), true);

    let hash = HashApr1Crypt::hash(b"").unwrap();
    assert_eq!(pwhash::apr1_crypt::verify(b"", hash.as_str()), true);
}

#[test]
fn bcrypt_output_format()
{
    let res = HashBcrypt::hash(b"pencil");
    assert_eq!(res.is_ok(), true);

    let hash = res.unwrap();
    assert_eq!(hash.starts_with("$2a$10$"), true);
    assert_eq!(hash.len(), 60);
    assert_eq!(pwhash::bcrypt::verify(b"pencil", hash.as_str()), true);
    assert_eq!(pwhash::bcrypt::verify(b"pencils", hash.as_str()), false);
}

#[test]
fn bcrypt_salt_is_fresh_per_call()
{
    let h1 = HashBcrypt::hash(b"pencil").unwrap();
    let h2 = HashBcrypt::hash(b"pencil").unwrap();

    // a new salt is generated on every call, both must still verify
    assert_ne!(h1, h2);
    assert_eq!(pwhash::bcrypt::verify(b"pencil", h1.as_str()), true);
    assert_eq!(pwhash::bcrypt::verify(b"pencil", h2.as_str()), true);
}
