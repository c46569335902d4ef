use crate::CliResult;
use appctx_api::WebApplicationType;

pub fn run(markers: &[String]) -> CliResult {
    let web_type = WebApplicationType::deduce(markers.iter().map(String::as_str));
    println!("{}", web_type);
    Ok(())
}
