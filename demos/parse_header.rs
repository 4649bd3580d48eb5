use cache_control_parse::{parse_request, parse_response, parse_response_directives};

const EXAMPLE: &str = r#"max-age=4649, s-maxage=600, no-cache="Set-Cookie", must-revalidate, community="UCI""#;

fn main() {
    let input = std::env::args().nth(1).unwrap_or_else(|| EXAMPLE.to_string());

    println!("=== Input ===");
    println!("{input}");

    println!("\n=== Tokens ===");
    match parse_response_directives(&input) {
        Ok(pairs) => {
            for pair in &pairs {
                println!("  {:<20} {:?} (quoted: {})", pair.name, pair.value, pair.quoted);
            }
        }
        Err(e) => println!("  error: {e}"),
    }

    println!("\n=== As Request ===");
    match parse_request(&input) {
        Ok(req) => {
            println!("{req:#?}");
            println!("Serialized:   {req}");
        }
        Err(e) => println!("error: {e}"),
    }

    println!("\n=== As Response ===");
    match parse_response(&input) {
        Ok(resp) => {
            println!("{resp:#?}");
            println!("Serialized:   {resp}");
        }
        Err(e) => println!("error: {e}"),
    }
}
