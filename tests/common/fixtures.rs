/// A small storefront page, written as well-formed XHTML so roxmltree can read it.
pub const STORE_PAGE: &str = r#"<html xmlns:svg="http://www.w3.org/2000/svg">
  <head><title>Shop</title></head>
  <body>
    <form id="login">
      <input name="user"/>
      <input name="pass"/>
      <button>Sign in</button>
    </form>
    <div class="products">
      <ul>
        <li>Small</li>
        <li>Medium</li>
        <li>Large</li>
      </ul>
      <svg:svg><svg:rect/><svg:rect/></svg:svg>
    </div>
    <div id="">footer</div>
  </body>
</html>"#;

/// Two elements sharing an id; id-anchored locators match both.
pub const DUPLICATE_IDS: &str = r#"<root><a id="dup"/><b><a id="dup"/></b></root>"#;
