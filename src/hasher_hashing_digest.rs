/*-
 * Pwdhash-rs - a password hashing library
 * Copyright (C) 2021  Aleksandr Morozov, RELKOM s.r.o
 * Copyright (C) 2021-2022  Aleksandr Morozov
 *
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 *  file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

#[cfg(not(feature = "exclude_ntlm"))]
use std::str;

#[cfg(not(feature = "exclude_ntlm"))]
use md4::{Md4, Digest};

use sha3::{Shake128, Shake256};
use sha3::digest::{ExtendableOutput, Update, XofReader};

use crate::{PasswordHashing, HasherResult, HasherRuntimeError, HasherErrorCode,
    HasherCommon, hasher_error_map};

/// A [PasswordHashing] provider which generates the NTLM password hash:
/// an MD4 digest over the password re-encoded as UTF-16LE without a BOM,
/// as used by the Windows authentication. Output is a lowercase hex of
/// the 16 byte digest.
#[cfg(not(feature = "exclude_ntlm"))]
pub struct HashMd4Ntlm;

#[cfg(not(feature = "exclude_ntlm"))]
impl PasswordHashing for HashMd4Ntlm
{
    fn hash(password: &[u8]) -> HasherResult<String>
    {
        // the password must be re-encodable to UTF-16, so it has to be a
        // valid UTF-8 sequence
        let pass =
            str::from_utf8(password)
                .map_err(|e|
                    hasher_error_map!(HasherErrorCode::EncodingFailure,
                        "md4 ntlm, password is not a valid utf-8 sequence, {}", e)
                )?;

        let mut utf16le: Vec<u8> = Vec::with_capacity(pass.len() * 2);

        for code_unit in pass.encode_utf16()
        {
            utf16le.extend_from_slice(&code_unit.to_le_bytes());
        }

        let digest = Md4::digest(&utf16le);

        return Ok(hex::encode(digest));
    }
}

/// A [PasswordHashing] provider which generates the SHA-3 SHAKE-256 hash
/// squeezed to [HasherCommon::SHAKE_OUTPUT_LEN] bytes, lowercase hex encoded.
pub struct HashSha3Shake256;

impl PasswordHashing for HashSha3Shake256
{
    fn hash(password: &[u8]) -> HasherResult<String>
    {
        let mut hasher = Shake256::default();
        hasher.update(password);

        let mut out = [0_u8; HasherCommon::SHAKE_OUTPUT_LEN];
        hasher.finalize_xof().read(&mut out);

        return Ok(hex::encode(out));
    }
}

/// A [PasswordHashing] provider which generates the SHA-3 SHAKE-128 hash
/// squeezed to [HasherCommon::SHAKE_OUTPUT_LEN] bytes, lowercase hex encoded.
pub struct HashSha3Shake128;

impl PasswordHashing for HashSha3Shake128
{
    fn hash(password: &[u8]) -> HasherResult<String>
    {
        let mut hasher = Shake128::default();
        hasher.update(password);

        let mut out = [0_u8; HasherCommon::SHAKE_OUTPUT_LEN];
        hasher.finalize_xof().read(&mut out);

        return Ok(hex::encode(out));
    }
}


#[cfg(not(feature = "exclude_ntlm"))]
#[test]
fn ntlm_reference_vector()
{
    let res = HashMd4Ntlm::hash(b"password");

    assert_eq!(res.is_ok(), true);
    assert_eq!(res.unwrap(), "8846f7eaee8fb117ad06bdd830b7586c");
}

#[cfg(not(feature = "exclude_ntlm"))]
#[test]
fn ntlm_empty_password()
{
    // UTF-16LE of "" is empty, so this is the MD4 digest of an empty input
    let res = HashMd4Ntlm::hash(b"");

    assert_eq!(res.is_ok(), true);
    assert_eq!(res.unwrap(), "31d6cfe0d16ae931b73c59d7e0c089c0");
}

#[cfg(not(feature = "exclude_ntlm"))]
#[test]
fn ntlm_rejects_non_utf8()
{
    let res = HashMd4Ntlm::hash(&[0x70, 0x61, 0xff, 0xfe]);

    assert_eq!(res.is_err(), true);
    assert_eq!(res.err().unwrap().get_err_code(), HasherErrorCode::EncodingFailure);
}

#[test]
fn shake256_empty_vector()
{
    let res = HashSha3Shake256::hash(b"");

    assert_eq!(res.is_ok(), true);
    assert_eq!(res.unwrap(),
        "46b9dd2b0ba88d13233b3feb743eeb243fcd52ea62b81b82b50c27646ed5762f\
         d75dc4ddd8c0f200cb05019d67b592f6fc821c49479ab48640292eacb3b7c4be");
}

#[test]
fn shake128_empty_vector()
{
    let res = HashSha3Shake128::hash(b"");

    assert_eq!(res.is_ok(), true);
    assert_eq!(res.unwrap(),
        "7f9c2ba4e88f827d616045507605853ed73b8093f6efbc88eb1a6eacfa66ef26\
         3cb1eea988004b93103cfb0aeefd2a686e01fa4a58e8a3639ca8a1e3f9ae57e2");
}

#[test]
fn shake_is_deterministic()
{
    let h1 = HashSha3Shake256::hash(b"pencil").unwrap();
    let h2 = HashSha3Shake256::hash(b"pencil").unwrap();

    assert_eq!(h1, h2);
    assert_eq!(h1.len(), HasherCommon::SHAKE_OUTPUT_LEN * 2);

    // the 128 variant must not collide with the 256 one
    let h3 = HashSha3Shake128::hash(b"pencil").unwrap();
    assert_ne!(h1, h3);
    assert_eq!(h3.len(), HasherCommon::SHAKE_OUTPUT_LEN * 2);
}
