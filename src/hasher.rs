/*-
 * Pwdhash-rs - a password hashing library
 * Copyright (C) 2021  Aleksandr Morozov, RELKOM s.r.o
 * Copyright (C) 2021-2022  Aleksandr Morozov
 *
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 *  file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use super::hasher_common::{HasherCommon, HashType, HashTypeAlias};
use super::hasher_error::{HasherResult, HasherRuntimeError, HasherErrorCode};
use super::hasher_hashing::{PasswordHashing, SaltedPasswordHashing};
use super::hasher_hashing_crypt::{HashSha512Crypt, HashSha256Crypt, HashBcrypt,
    HashApr1Crypt, HashMd5Crypt};
use super::hasher_hashing_digest::{HashSha3Shake256, HashSha3Shake128};
#[cfg(not(feature = "exclude_ntlm"))]
use super::hasher_hashing_digest::HashMd4Ntlm;
use super::{hasher_error};

/// A stateless dispatcher over the hash types which are hardcoded in
/// [crate::HASH_TYPES]. Every function is a pure computation, the instance
/// holds no data and all functions can be called concurrently.
pub struct PasswordHasher{}

impl PasswordHasher
{
    /// Hashes the `password` with the hash type selected by name. The salt,
    /// where the format requires one, is generated by the delegate library.
    ///
    /// # Arguments
    ///
    /// * `password` - a password, arbitrary bytes including empty
    ///
    /// * `hash_type` - a hash type name as in [crate::HASH_TYPES] i.e sha512
    ///
    /// # Returns
    ///
    /// * [HasherResult] - an encoded hash or Error
    ///                     [HasherErrorCode::UnsupportedAlgorithm] if the name
    ///                     is not known
    pub
    fn hash_password<P, S>(password: P, hash_type: S) -> HasherResult<String>
    where P: AsRef<[u8]>, S: AsRef<str>
    {
        let htype = HasherCommon::get_hashtype(hash_type)?;

        return Self::hash_password_type(password, htype);
    }

    /// Hashes the `password` with an already resolved [HashType] table entry.
    pub
    fn hash_password_type<P: AsRef<[u8]>>(password: P, hash_type: &HashType) -> HasherResult<String>
    {
        let password = password.as_ref();

        match hash_type.hash_type
        {
            HashTypeAlias::Sha512Crypt => return HashSha512Crypt::hash(password),
            HashTypeAlias::Sha256Crypt => return HashSha256Crypt::hash(password),
            HashTypeAlias::Bcrypt => return HashBcrypt::hash(password),
            HashTypeAlias::Apr1Crypt => return HashApr1Crypt::hash(password),
            HashTypeAlias::Md5Crypt => return HashMd5Crypt::hash(password),
            #[cfg(not(feature = "exclude_ntlm"))]
            HashTypeAlias::Md4Ntlm => return HashMd4Ntlm::hash(password),
            #[cfg(feature = "exclude_ntlm")]
            HashTypeAlias::Md4Ntlm =>
                hasher_error!(HasherErrorCode::FeatureNotSupported,
                    "hash type: '{}' was excluded at build time", hash_type.hash_name),
            HashTypeAlias::Sha3Shake256 => return HashSha3Shake256::hash(password),
            HashTypeAlias::Sha3Shake128 => return HashSha3Shake128::hash(password),
        }
    }

    /// Hashes the `password` with the hash type selected by name and the
    /// caller provided salt. Only the crypt(3) family accepts a salt, for
    /// any other hash type an error is returned.
    ///
    /// # Arguments
    ///
    /// * `password` - a password, arbitrary bytes including empty
    ///
    /// * `salt` - a salt in the delegate's salt alphabet
    ///
    /// * `hash_type` - a hash type name as in [crate::HASH_TYPES]
    ///
    /// # Returns
    ///
    /// * [HasherResult] - an encoded hash or Error
    ///                     [HasherErrorCode::FeatureNotSupported] if the hash
    ///                     type does not carry a caller provided salt
    pub
    fn hash_password_salted<P, S1, S2>(password: P, salt: S1, hash_type: S2) -> HasherResult<String>
    where P: AsRef<[u8]>, S1: AsRef<str>, S2: AsRef<str>
    {
        let htype = HasherCommon::get_hashtype(hash_type)?;

        if htype.salted == false
        {
            hasher_error!(HasherErrorCode::FeatureNotSupported,
                "hash type: '{}' does not accept a caller provided salt", htype.hash_name);
        }

        let password = password.as_ref();
        let salt = salt.as_ref();

        match htype.hash_type
        {
            HashTypeAlias::Sha512Crypt => return HashSha512Crypt::hash_with(salt, password),
            HashTypeAlias::Sha256Crypt => return HashSha256Crypt::hash_with(salt, password),
            HashTypeAlias::Md5Crypt => return HashMd5Crypt::hash_with(salt, password),
            HashTypeAlias::Apr1Crypt => return HashApr1Crypt::hash_with(salt, password),
            _ =>
                hasher_error!(HasherErrorCode::FeatureNotSupported,
                    "hash type: '{}' does not accept a caller provided salt", htype.hash_name),
        }
    }
}

impl PasswordHasher
{
    /// Hashes the `password` with the crypt(3) SHA-512 ($6$) hash function.
    pub
    fn hash_sha512_crypt<P: AsRef<[u8]>>(password: P) -> HasherResult<String>
    {
        return HashSha512Crypt::hash(password.as_ref());
    }

    /// Hashes the `password` with the crypt(3) SHA-256 ($5$) hash function.
    pub
    fn hash_sha256_crypt<P: AsRef<[u8]>>(password: P) -> HasherResult<String>
    {
        return HashSha256Crypt::hash(password.as_ref());
    }

    /// Hashes the `password` with bcrypt ($2a$), the salt is generated by
    /// the delegate on every call.
    pub
    fn hash_bcrypt<P: AsRef<[u8]>>(password: P) -> HasherResult<String>
    {
        return HashBcrypt::hash(password.as_ref());
    }

    /// Hashes the `password` with the Apache APR1 ($apr1$) hash function.
    pub
    fn hash_apr1_crypt<P: AsRef<[u8]>>(password: P) -> HasherResult<String>
    {
        return HashApr1Crypt::hash(password.as_ref());
    }

    /// Hashes the `password` with the crypt(3) MD5 ($1$) hash function.
    pub
    fn hash_md5_crypt<P: AsRef<[u8]>>(password: P) -> HasherResult<String>
    {
        return HashMd5Crypt::hash(password.as_ref());
    }

    /// Hashes the `password` with MD4 over its UTF-16LE form (NTLM).
    #[cfg(not(feature = "exclude_ntlm"))]
    pub
    fn hash_md4_ntlm<P: AsRef<[u8]>>(password: P) -> HasherResult<String>
    {
        return HashMd4Ntlm::hash(password.as_ref());
    }

    /// Hashes the `password` with SHA-3 SHAKE-256 squeezed to 64 bytes.
    pub
    fn hash_sha3_shake256<P: AsRef<[u8]>>(password: P) -> HasherResult<String>
    {
        return HashSha3Shake256::hash(password.as_ref());
    }

    /// Hashes the `password` with SHA-3 SHAKE-128 squeezed to 64 bytes.
    pub
    fn hash_sha3_shake128<P: AsRef<[u8]>>(password: P) -> HasherResult<String>
    {
        return HashSha3Shake128::hash(password.as_ref());
    }
}


#[test]
fn dispatch_crypt_family_by_name()
{
    let res = PasswordHasher::hash_password(b"pencil", "sha512");
    assert_eq!(res.is_ok(), true);
    assert_eq!(res.unwrap().starts_with("$6$"), true);

    let res = PasswordHasher::hash_password(b"pencil", "sha256");
    assert_eq!(res.is_ok(), true);
    assert_eq!(res.unwrap().starts_with("$5$"), true);

    let res = PasswordHasher::hash_password(b"pencil", "md5");
    assert_eq!(res.is_ok(), true);
    assert_eq!(res.unwrap().starts_with("$1$"), true);

    let res = PasswordHasher::hash_password(b"pencil", "apr1");
    assert_eq!(res.is_ok(), true);
    assert_eq!(res.unwrap().starts_with("$apr1$"), true);

    let res = PasswordHasher::hash_password(b"pencil", "bcrypt");
    assert_eq!(res.is_ok(), true);
    assert_eq!(res.unwrap().starts_with("$2a$10$"), true);
}

#[test]
fn dispatch_digest_family_by_name()
{
    #[cfg(not(feature = "exclude_ntlm"))]
    {
        let res = PasswordHasher::hash_password(b"password", "md4-ntlm");
        assert_eq!(res.is_ok(), true);
        assert_eq!(res.unwrap(), "8846f7eaee8fb117ad06bdd830b7586c");
    }

    let res = PasswordHasher::hash_password(b"pencil", "sha3-shake256");
    assert_eq!(res.is_ok(), true);
    assert_eq!(res.unwrap().len(), 128);

    let res = PasswordHasher::hash_password(b"pencil", "sha3-shake128");
    assert_eq!(res.is_ok(), true);
    assert_eq!(res.unwrap().len(), 128);
}

#[test]
fn dispatch_unknown_name()
{
    let res = PasswordHasher::hash_password(b"pencil", "rot13");

    assert_eq!(res.is_err(), true);
    assert_eq!(res.err().unwrap().get_err_code(), HasherErrorCode::UnsupportedAlgorithm);
}

#[test]
fn dispatch_empty_password_is_valid()
{
    let res = PasswordHasher::hash_password(b"", "sha512");
    assert_eq!(res.is_ok(), true);

    let hash = res.unwrap();
    assert_eq!(pwhash::sha512_crypt::verify(b"", hash.as_str()), true);
}

#[test]
fn dispatch_salted_is_deterministic()
{
    let h1 = PasswordHasher::hash_password_salted(b"Hello world!", "saltstring", "sha512");
    assert_eq!(h1.is_ok(), true);

    let h1 = h1.unwrap();
    let h2 = PasswordHasher::hash_password_salted(b"Hello world!", "saltstring", "sha512").unwrap();

    assert_eq!(h1, h2);
    assert_eq!(h1,
        "$6$saltstring$svn8UoSVapNtMuq1ukKS4tPQd8iKwSMHWjl/O817G3uBnIFNjnQJuesI68u4OTLiBFdcbYEdFCoEOfaS35inz1");
}

#[test]
fn dispatch_salted_rejects_unsalted_types()
{
    let res = PasswordHasher::hash_password_salted(b"pencil", "saltsalt", "bcrypt");

    assert_eq!(res.is_err(), true);
    assert_eq!(res.err().unwrap().get_err_code(), HasherErrorCode::FeatureNotSupported);

    let res = PasswordHasher::hash_password_salted(b"pencil", "saltsalt", "sha3-shake256");

    assert_eq!(res.is_err(), true);
    assert_eq!(res.err().unwrap().get_err_code(), HasherErrorCode::FeatureNotSupported);
}

#[test]
fn named_entry_points_match_dispatch()
{
    let hash = PasswordHasher::hash_sha3_shake256(b"pencil").unwrap();
    let disp = PasswordHasher::hash_password(b"pencil", "sha3-shake256").unwrap();
    assert_eq!(hash, disp);

    let hash = PasswordHasher::hash_sha3_shake128(b"pencil").unwrap();
    let disp = PasswordHasher::hash_password(b"pencil", "sha3-shake128").unwrap();
    assert_eq!(hash, disp);

    #[cfg(not(feature = "exclude_ntlm"))]
    {
        let hash = PasswordHasher::hash_md4_ntlm(b"pencil").unwrap();
        let disp = PasswordHasher::hash_password(b"pencil", "md4-ntlm").unwrap();
        assert_eq!(hash, disp);
    }

    // bcrypt re-salts per call, so only the format can be compared
    let hash = PasswordHasher::hash_bcrypt(b"pencil").unwrap();
    assert_eq!(hash.starts_with("$2a$10$"), true);

    let hash = PasswordHasher::hash_sha512_crypt(b"pencil").unwrap();
    assert_eq!(pwhash::sha512_crypt::verify(b"pencil", hash.as_str()), true);

    let hash = PasswordHasher::hash_sha256_crypt(b"pencil").unwrap();
    assert_eq!(pwhash::sha256_crypt::verify(b"pencil", hash.as_str()), true);

    let hash = PasswordHasher::hash_md5_crypt(b"pencil").unwrap();
    assert_eq!(pwhash::md5_crypt::verify(b"pencil", hash.as_str()), true);

    let hash = PasswordHasher::hash_apr1_crypt(b"pencil").unwrap();
    assert_eq!(pwhash::apr1_crypt::verify(b"pencil", hash.as_str()), true);
}
