use pwdhash_rs::PasswordHasher;
use pwdhash_rs::HasherResult;

// Same (password, salt) always produces the same crypt(3) style hash.
fn main() -> HasherResult<()>
{
    let password = "Hello world!";
    let salt = "saltstring";

    println!("sha512: {}", PasswordHasher::hash_password_salted(password, salt, "sha512")?);
    println!("sha256: {}", PasswordHasher::hash_password_salted(password, salt, "sha256")?);
    println!("md5:    {}", PasswordHasher::hash_password_salted(password, "saltsalt", "md5")?);
    println!("apr1:   {}", PasswordHasher::hash_password_salted(password, "saltsalt", "apr1")?);

    return Ok(());
}
