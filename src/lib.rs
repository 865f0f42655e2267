/*-
 * Pwdhash-rs - a password hashing library
 * Copyright (C) 2021  Aleksandr Morozov, RELKOM s.r.o
 * Copyright (C) 2021-2022  Aleksandr Morozov
 *
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 *  file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Pwdhash-RS
//!
//! Generates password hashes, dispatched by a hash type name or called
//! directly:
//! - crypt(3) SHA-512 ($6$)
//! - crypt(3) SHA-256 ($5$)
//! - bcrypt ($2a$)
//! - Apache APR1 ($apr1$)
//! - crypt(3) MD5 ($1$)
//! - MD4 NTLM (UTF-16LE)
//! - SHA-3 SHAKE-256
//! - SHA-3 SHAKE-128
//!
//! All hash functions are delegated to the pwhash, md4 and sha3 crates,
//! this library only marshals the inputs and dispatches.
//!
//! For usage see ./demos/
//!
//! Files:
//! - hasher.rs contains the dispatcher and the named entry points
//! - hasher_hashing.rs contains the hashing traits
//! - hasher_hashing_crypt.rs contains the crypt(3) family and bcrypt providers
//! - hasher_hashing_digest.rs contains the NTLM and SHAKE providers
//! - hasher_error.rs error reporting code
//! - hasher_common.rs a common code

pub mod hasher;
pub mod hasher_hashing;
pub mod hasher_hashing_crypt;
pub mod hasher_hashing_digest;
pub mod hasher_common;
pub mod hasher_error;

pub use self::hasher::*;
pub use self::hasher_hashing::*;
pub use self::hasher_hashing_crypt::*;
pub use self::hasher_hashing_digest::*;
pub use self::hasher_common::*;
pub use self::hasher_error::*;
