use vchat_application::Router;

pub fn list() {
    println!("{:<10} PATH", "NAME");
    for route in Router::routes() {
        println!("{:<10} {}", route.name, route.pattern);
    }
}
