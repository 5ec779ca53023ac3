use dropbot::{DropbotError, LocatorNode, XmlDocument, derive_xpath, resolve_xpath, translate_selector};
use log::info;
use std::env;
use std::fs;

const USAGE: &str = "\
Usage:
  dropbot translate <selector>        Print the XPath a CSS selector translates to
  dropbot paths <file.xml>            Print the locator path of every element
  dropbot locate <file.xml> <xpath>   Resolve a locator path and print the matches";

/// A small CLI around the locator tools, for inspecting documents offline.
fn main() -> Result<(), DropbotError> {
    env_logger::init();

    let args: Vec<String> = env::args().skip(1).collect();
    let args: Vec<&str> = args.iter().map(String::as_str).collect();
    match args.as_slice() {
        ["translate", selector] => {
            println!("{}", translate_selector(selector));
        }
        ["paths", path] => {
            let text = fs::read_to_string(path)?;
            let doc = XmlDocument::parse(&text)?;
            for node in doc.document().descendants().filter(|n| n.is_element()) {
                if let Some(xpath) = derive_xpath(Some(&node)) {
                    println!("{}", xpath);
                }
            }
        }
        ["locate", path, xpath] => {
            let text = fs::read_to_string(path)?;
            let doc = XmlDocument::parse(&text)?;
            let matches = resolve_xpath(&doc.root_node(), xpath)?;
            info!("'{}' matched {} node(s)", xpath, matches.len());
            for node in matches {
                let name = LocatorNode::name(&node).map(|q| q.to_string()).unwrap_or_default();
                let text = LocatorNode::string_value(&node);
                println!("{}\t{}", name, text.trim());
            }
        }
        _ => {
            eprintln!("{}", USAGE);
            return Err(DropbotError::Usage("unrecognized arguments".to_string()));
        }
    }
    Ok(())
}
