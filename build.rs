use chrono::Utc;

fn main() {
    // the footer only shows the day the site was built
    let built = Utc::now().format("%Y-%m-%d");
    println!("cargo:rustc-env=BUILD_DATE={built}");
    println!("cargo:rerun-if-changed=build.rs");
}
