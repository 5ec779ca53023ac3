mod common;

use common::fixtures::STORE_PAGE;
use common::{TestResult, element, init_logging};
use dropbot::{
    TreeHost, XPathResultType, XPathValue, XmlDocument, evaluate, get_elements_by_selector,
    get_elements_by_xpath, translate_selector,
};

#[test]
fn selectors_translate_to_descendant_and_child_steps() {
    assert_eq!(translate_selector("form > input"), "//form/input");
    assert_eq!(translate_selector("div ul li"), "//div//ul//li");
    assert_eq!(translate_selector("input[name=\"user\"]"), "//input[@name='user']");
    assert_eq!(translate_selector("button, #login"), "//button | //*[@id='login']");
}

#[test]
fn id_selectors_resolve_natively() -> TestResult {
    init_logging();
    let doc = XmlDocument::parse(STORE_PAGE)?;
    let host = TreeHost::new(&doc.root_node());
    assert_eq!(
        get_elements_by_selector(&host, "#login"),
        vec![element(&doc, "form", 0)]
    );
    Ok(())
}

#[test]
fn unsupported_expressions_match_nothing() -> TestResult {
    init_logging();
    let doc = XmlDocument::parse(STORE_PAGE)?;
    let host = TreeHost::new(&doc.root_node());
    assert!(get_elements_by_selector(&host, "ul > li").is_empty());
    assert!(get_elements_by_xpath(&host, "count(//li)").is_empty());
    Ok(())
}

#[test]
fn result_types_shape_the_value() -> TestResult {
    init_logging();
    let doc = XmlDocument::parse(STORE_PAGE)?;
    let host = TreeHost::new(&doc.root_node());
    let items = "/html/body/div[1]/ul/li";

    match evaluate(&host, items, None, XPathResultType::OrderedNodeSnapshot)? {
        XPathValue::Nodes(nodes) => assert_eq!(nodes.len(), 3),
        other => panic!("expected nodes, got {:?}", other),
    }
    assert_eq!(
        evaluate(&host, items, None, XPathResultType::FirstOrderedNode)?,
        XPathValue::Node(Some(element(&doc, "li", 0)))
    );
    assert_eq!(
        evaluate(&host, items, None, XPathResultType::String)?,
        XPathValue::String("Small".to_string())
    );
    assert_eq!(
        evaluate(&host, items, None, XPathResultType::Boolean)?,
        XPathValue::Boolean(true)
    );
    Ok(())
}

#[test]
fn context_nodes_do_not_change_absolute_paths() -> TestResult {
    let doc = XmlDocument::parse(STORE_PAGE)?;
    let host = TreeHost::new(&doc.root_node());
    let ul = element(&doc, "ul", 0);
    let value = evaluate(&host, "/html/body/form/button", Some(&ul), XPathResultType::Any)?;
    assert_eq!(value.into_nodes(), vec![element(&doc, "button", 0)]);
    Ok(())
}
