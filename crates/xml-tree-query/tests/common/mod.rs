//! Shared fixtures for xml-tree-query tests

#![allow(dead_code)]

use tracing_subscriber::EnvFilter;

/// Route library events to the test output; `RUST_LOG=trace` shows them.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

pub const DEEP_XML: &str = r#"<xml id="33"><content att="something"><first><second><my-value>zizoo</my-value></second></first></content></xml>"#;

pub const NESTED_EDU_XML: &str = r#"<xml id="33"><content att="something"><first><second><edu><e><d><u><edu></edu></u></d></e></edu><my-value name="zizoo" id="1" dev="edu">zizoo</my-value></second></first></content></xml>"#;

pub const EXTRAS_XML: &str = r#"<xml id="33"><content att="something"><first><second><extras><extra name="wrong" id="2" dev="other"></extra><extra name="zizoo" id="1" dev="edu"></extra></extras></second></first></content></xml>"#;

pub const BOOKSTORE_XML: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<bookstore>
  <book category="COOKING">
    <title lang="en">Everyday Italian</title>
    <author>Giada De Laurentiis</author>
    <year>2005</year>
    <price>30.00</price>
  </book>
  <book category="CHILDREN">
    <title lang="en">Harry Potter</title>
    <author>J K. Rowling</author>
    <year>2005</year>
    <price>29.99</price>
  </book>
  <section>
      <book category="WEB">
        <title lang="en-us">XQuery Kick Start</title>
        <author>James McGovern</author>
        <year>2003</year>
        <price>49.99</price>
      </book>
      <book category="WEB">
        <title lang="en-us">Learning XML</title>
        <author>Erik T. Ray</author>
        <year>2003</year>
        <price>39.95</price>
      </book>
  </section>
  <subsection>
      <book2 category="WEB">
        <title lang="en-us">XQuery Kick Start</title>
        <author>James McGovern</author>
        <year>2003</year>
        <price>49.99</price>
      </book2>
      <book2 category="WEB">
        <title lang="en-us">Learning XML</title>
        <author>Erik T. Ray</author>
        <year>2003</year>
        <price>39.95</price>
      </book2>
  </subsection>
</bookstore>"#;
