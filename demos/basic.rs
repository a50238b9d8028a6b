use site::{Scheme, Site};

fn main() {
    // Build a site from parts
    let mut site = Site::new(Scheme::Https, "example.org");
    site.add_subdomain("www");
    site.add_path("user");
    site.set_file("home.html");
    site.put_parameter("id", "3");
    site.set_fragment("top");

    println!("URL: {site}"); // https://www.example.org/user/home.html?id=3#top

    // Split an existing URL back into parts
    let parsed = Site::parse("http://alice@api.example.org:8080/v1/users.json?limit=10")
        .expect("Failed to parse URL");

    println!("Subdomains: {:?}", parsed.subdomains()); // ["api"]
    println!("Host: {}", parsed.host()); // example.org
    println!("Port: {}", parsed.port()); // 8080
    println!("Paths: {:?}", parsed.paths()); // ["v1"]
    println!("File: {:?}", parsed.file()); // Some("users.json")
    println!("Limit: {:?}", parsed.parameter("limit")); // Some("10")
}
