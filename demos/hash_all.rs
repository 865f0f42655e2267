use pwdhash_rs::PasswordHasher;
use pwdhash_rs::HasherResult;

fn main() -> HasherResult<()>
{
    let password = "pencil";

    println!("sha512:        {}", PasswordHasher::hash_sha512_crypt(password)?);
    println!("sha256:        {}", PasswordHasher::hash_sha256_crypt(password)?);
    println!("bcrypt:        {}", PasswordHasher::hash_bcrypt(password)?);
    println!("apr1:          {}", PasswordHasher::hash_apr1_crypt(password)?);
    println!("md5:           {}", PasswordHasher::hash_md5_crypt(password)?);
    #[cfg(not(feature = "exclude_ntlm"))]
    println!("md4-ntlm:      {}", PasswordHasher::hash_md4_ntlm(password)?);
    println!("sha3-shake256: {}", PasswordHasher::hash_sha3_shake256(password)?);
    println!("sha3-shake128: {}", PasswordHasher::hash_sha3_shake128(password)?);

    return Ok(());
}
