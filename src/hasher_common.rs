/*-
 * Pwdhash-rs - a password hashing library
 * Copyright (C) 2021  Aleksandr Morozov, RELKOM s.r.o
 * Copyright (C) 2021-2022  Aleksandr Morozov
 *
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 *  file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::fmt;

use super::hasher_error::{HasherResult, HasherRuntimeError, HasherErrorCode};
use super::{hasher_error};

/// A numeric alias for the [HASH_TYPES]. If any changes were made in
/// [HASH_TYPES] then verify that [HashTypeAlias] is in order.
#[derive(Debug, PartialEq, Clone, Copy)]
pub enum HashTypeAlias
{
    Sha512Crypt = 0,
    Sha256Crypt = 1,
    Bcrypt = 2,
    Apr1Crypt = 3,
    Md5Crypt = 4,
    Md4Ntlm = 5,
    Sha3Shake256 = 6,
    Sha3Shake128 = 7,
}

/// A structured data about supported hash types
#[derive(Debug, PartialEq)]
pub struct HashType
{
    /// A hash type name as accepted by the dispatcher
    pub hash_name: &'static str,

    /// A numeric alias of this table entry
    pub hash_type: HashTypeAlias,

    /// Does the output format accept a caller provided salt (crypt(3) family)
    pub salted: bool,
}

impl fmt::Display for HashType
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result
    {
        write!(f, "hash: {}, salted: {}", self.hash_name, self.salted)
    }
}

/// A table of all supported hash types.
pub const HASH_TYPES: &'static [HashType] =
&[
    HashType{hash_name: "sha512",           hash_type: HashTypeAlias::Sha512Crypt,  salted: true},
    HashType{hash_name: "sha256",           hash_type: HashTypeAlias::Sha256Crypt,  salted: true},
    HashType{hash_name: "bcrypt",           hash_type: HashTypeAlias::Bcrypt,       salted: false},
    HashType{hash_name: "apr1",             hash_type: HashTypeAlias::Apr1Crypt,    salted: true},
    HashType{hash_name: "md5",              hash_type: HashTypeAlias::Md5Crypt,     salted: true},
    HashType{hash_name: "md4-ntlm",         hash_type: HashTypeAlias::Md4Ntlm,      salted: false},
    HashType{hash_name: "sha3-shake256",    hash_type: HashTypeAlias::Sha3Shake256, salted: false},
    HashType{hash_name: "sha3-shake128",    hash_type: HashTypeAlias::Sha3Shake128, salted: false},
];

pub struct HasherCommon{}
impl HasherCommon
{
    /// A bcrypt cost factor which is used when the caller did not provide one
    pub const BCRYPT_DEFAULT_COST: u32 = 10;

    /// A squeezed output length in bytes of the SHAKE extendable output functions
    pub const SHAKE_OUTPUT_LEN: usize = 64;

    /// Output all supported types with separator
    pub
    fn advertise<S: AsRef<str>>(sep: S) -> String
    {
        let mut hash_adv: Vec<&str> = Vec::with_capacity(HASH_TYPES.len());

        for hash_type in HASH_TYPES.iter()
        {
            hash_adv.push(hash_type.hash_name);
        }

        return hash_adv.join(sep.as_ref());
    }

    /// Retrieves the hash type by name which are hardcoded in [HASH_TYPES]
    /// i.e sha512.
    ///
    /// # Arguments
    ///
    /// * `hash_type` - a hash type name
    ///
    /// # Returns
    ///
    /// * [HasherResult] - a reference to record from table with static lifetime
    ///                     or Error [HasherErrorCode::UnsupportedAlgorithm] if not found
    pub
    fn get_hashtype<S: AsRef<str>>(hash_type: S) -> HasherResult<&'static HashType>
    {
        let hash_name = hash_type.as_ref();

        for h_type in HASH_TYPES.iter()
        {
            if h_type.hash_name == hash_name
            {
                return Ok(h_type);
            }
        }

        hasher_error!(HasherErrorCode::UnsupportedAlgorithm,
            "unknown hash type: {}", hash_name);
    }

    /// Retrieves the hash type from [HASH_TYPES] by the numeric alias which
    /// are hardcoded in [HashTypeAlias].
    ///
    /// # Arguments
    ///
    /// * `hash_type` - a hash numeric type [HashTypeAlias]
    ///
    /// # Returns
    ///
    /// * [HasherResult] - a reference to record from table with static lifetime
    ///                     or Error [HasherErrorCode::UnsupportedAlgorithm] if not found
    pub
    fn get_hashtype_numeric(hash_type: HashTypeAlias) -> HasherResult<&'static HashType>
    {
        let hash_offset = *(&hash_type) as usize;

        match HASH_TYPES.get(hash_offset)
        {
            Some(r) => return Ok(r),
            None => hasher_error!(HasherErrorCode::UnsupportedAlgorithm,
                "unknown hash type: {:?}", hash_type)
        }
    }
}

#[test]
fn hashtype_table_is_in_order()
{
    for hash_type in HASH_TYPES.iter()
    {
        let by_name = HasherCommon::get_hashtype(hash_type.hash_name);
        assert_eq!(by_name.is_ok(), true);
        assert_eq!(by_name.unwrap(), hash_type);

        let by_alias = HasherCommon::get_hashtype_numeric(hash_type.hash_type);
        assert_eq!(by_alias.is_ok(), true);
        assert_eq!(by_alias.unwrap(), hash_type);
    }
}

#[test]
fn hashtype_unknown_name()
{
    let res = HasherCommon::get_hashtype("rot13");

    assert_eq!(res.is_err(), true);
    assert_eq!(res.err().unwrap().get_err_code(), HasherErrorCode::UnsupportedAlgorithm);
}

#[test]
fn advertise_lists_all()
{
    let adv = HasherCommon::advertise(", ");

    for hash_type in HASH_TYPES.iter()
    {
        assert_eq!(adv.contains(hash_type.hash_name), true);
    }
}
