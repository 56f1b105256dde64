use typed_qs::{Config, Value};

fn main() -> typed_qs::Result<()> {
    let params = typed_qs::parse("https://example.com/search?page=2&exact=true&q=rust%20crates")?;
    for (key, value) in &params {
        println!("{key}: {value:?}");
    }

    let url = typed_qs::stringify_with_base(&params, "https://example.com/search")?;
    println!("{url}");

    // opting out of the falsy collapse keeps zero and false values
    let params = Config::new()
        .collapse_falsy(false)
        .parse_str("debug=false&retries=0")?;
    assert_eq!(params["debug"], Value::Bool(false));
    assert_eq!(params["retries"], Value::Int(0));

    Ok(())
}
