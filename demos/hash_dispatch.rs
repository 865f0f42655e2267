use std::env;
use std::process::exit;

use pwdhash_rs::PasswordHasher;
use pwdhash_rs::HasherCommon;

fn main()
{
    let args: Vec<String> = env::args().collect();

    if args.len() != 3
    {
        println!("usage: hash_dispatch <hash_type> <password>");
        println!("hash types: {}", HasherCommon::advertise(", "));
        exit(1);
    }

    match PasswordHasher::hash_password(args[2].as_bytes(), args[1].as_str())
    {
        Ok(hash) =>
        {
            println!("{}", hash);
        },
        Err(e) =>
        {
            println!("{}", e);
            exit(1);
        }
    }
}
