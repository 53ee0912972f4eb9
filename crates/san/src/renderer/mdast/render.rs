//! Rendering functions for the mdast renderer.

use markdown::mdast::Node;

use super::context::{Context, Scope};
use crate::renderer::CodeBlockRenderer;

/// Renders a list node as `<ul>` or `<ol>`.
fn render_list(list: &markdown::mdast::List, ctx: &mut Context, renderer: &mut dyn CodeBlockRenderer) {
    let tag = if list.ordered { "ol" } else { "ul" };
    ctx.push_raw(&format!("<{}>", tag));
    ctx.enter(Scope::List {
        spread: list.spread,
    });

    for child in &list.children {
        render_node(child, ctx, renderer);
    }

    ctx.exit();
    ctx.push_raw(&format!("</{}>", tag));
}

/// Renders a paragraph node, suppressing `<p>` wrappers in tight lists.
fn render_paragraph(
    para: &markdown::mdast::Paragraph,
    ctx: &mut Context,
    renderer: &mut dyn CodeBlockRenderer,
) {
    let in_tight_list = ctx.is_in_tight_list();
    if !in_tight_list {
        ctx.push_raw("<p>");
    }

    for child in &para.children {
        render_node(child, ctx, renderer);
    }

    if !in_tight_list {
        ctx.push_raw("</p>");
    }
}

/// Renders a link node as `<a>`.
fn render_link(link: &markdown::mdast::Link, ctx: &mut Context, renderer: &mut dyn CodeBlockRenderer) {
    ctx.push_raw(r#"<a href=""#);
    ctx.push_attr_value(&link.url);
    ctx.push_raw(r#"""#);

    if let Some(title) = &link.title {
        ctx.push_raw(r#" title=""#);
        ctx.push_attr_value(title);
        ctx.push_raw(r#"""#);
    }

    ctx.push_raw(">");

    for child in &link.children {
        render_node(child, ctx, renderer);
    }

    ctx.push_raw("</a>");
}

/// Renders an image node as `<img>`.
fn render_image(img: &markdown::mdast::Image, ctx: &mut Context) {
    ctx.push_raw(r#"<img src=""#);
    ctx.push_attr_value(&img.url);
    ctx.push_raw(r#"""#);

    ctx.push_raw(r#" alt=""#);
    ctx.push_attr_value(&img.alt);
    ctx.push_raw(r#"""#);

    if let Some(title) = &img.title {
        ctx.push_raw(r#" title=""#);
        ctx.push_attr_value(title);
        ctx.push_raw(r#"""#);
    }

    ctx.push_raw(" />");
}

/// Renders a code block through the injected code block renderer.
///
/// The info string is rebuilt from the parsed language and meta, so the
/// renderer sees what the author wrote after the opening fence.
fn render_code(code: &markdown::mdast::Code, ctx: &mut Context, renderer: &mut dyn CodeBlockRenderer) {
    let info = match (code.lang.as_deref(), code.meta.as_deref()) {
        (Some(lang), Some(meta)) => format!("{} {}", lang, meta),
        (Some(lang), None) => lang.to_string(),
        (None, _) => String::new(),
    };
    let rendered = renderer.render_code(&code.value, &info);
    ctx.push_raw(&rendered);
}

/// Helper function to render a table row with proper alignment.
fn render_table_row(
    row: &markdown::mdast::TableRow,
    ctx: &mut Context,
    renderer: &mut dyn CodeBlockRenderer,
    is_header: bool,
    aligns: &[markdown::mdast::AlignKind],
) {
    ctx.push_raw("<tr>");

    for (i, cell) in row.children.iter().enumerate() {
        if let Node::TableCell(c) = cell {
            let tag = if is_header { "th" } else { "td" };

            let align_attr = if i < aligns.len() {
                match aligns[i] {
                    markdown::mdast::AlignKind::Left => " align=\"left\"",
                    markdown::mdast::AlignKind::Right => " align=\"right\"",
                    markdown::mdast::AlignKind::Center => " align=\"center\"",
                    markdown::mdast::AlignKind::None => "",
                }
            } else {
                ""
            };

            ctx.push_raw(&format!("<{}{}>", tag, align_attr));

            for child in &c.children {
                render_node(child, ctx, renderer);
            }

            ctx.push_raw(&format!("</{}>", tag));
        }
    }

    ctx.push_raw("</tr>");
}

/// Renders a table node as `<table>` with `<thead>` and optional `<tbody>`.
fn render_table(table: &markdown::mdast::Table, ctx: &mut Context, renderer: &mut dyn CodeBlockRenderer) {
    ctx.push_raw("<table>");

    ctx.push_raw("<thead>");
    if let Some(Node::TableRow(row)) = table.children.first() {
        render_table_row(row, ctx, renderer, true, &table.align);
    }
    ctx.push_raw("</thead>");

    if table.children.len() > 1 {
        ctx.push_raw("<tbody>");
        for row in table.children.iter().skip(1) {
            if let Node::TableRow(r) = row {
                render_table_row(r, ctx, renderer, false, &table.align);
            }
        }
        ctx.push_raw("</tbody>");
    }

    ctx.push_raw("</table>");
}

/// Renders a blockquote node as `<blockquote>`.
fn render_blockquote(
    quote: &markdown::mdast::Blockquote,
    ctx: &mut Context,
    renderer: &mut dyn CodeBlockRenderer,
) {
    ctx.push_raw("<blockquote>");
    for child in &quote.children {
        render_node(child, ctx, renderer);
    }
    ctx.push_raw("</blockquote>");
}

/// Recursively renders an AST node to HTML, updating the context state.
pub fn render_node(node: &Node, ctx: &mut Context, renderer: &mut dyn CodeBlockRenderer) {
    match node {
        Node::Root(root) => {
            for child in &root.children {
                render_node(child, ctx, renderer);
            }
        }
        Node::Text(text) => ctx.push_text(&text.value),
        Node::Paragraph(para) => render_paragraph(para, ctx, renderer),
        Node::Link(link) => render_link(link, ctx, renderer),
        Node::Strong(strong) => {
            ctx.push_raw("<strong>");
            for child in &strong.children {
                render_node(child, ctx, renderer);
            }
            ctx.push_raw("</strong>");
        }
        Node::Emphasis(emphasis) => {
            ctx.push_raw("<em>");
            for child in &emphasis.children {
                render_node(child, ctx, renderer);
            }
            ctx.push_raw("</em>");
        }
        Node::InlineCode(code) => {
            ctx.push_raw("<code>");
            ctx.push_text(&code.value);
            ctx.push_raw("</code>");
        }
        Node::Heading(heading) => {
            ctx.push_raw(&format!("<h{}>", heading.depth));
            for child in &heading.children {
                render_node(child, ctx, renderer);
            }
            ctx.push_raw(&format!("</h{}>", heading.depth));
        }
        Node::List(list) => render_list(list, ctx, renderer),
        Node::ListItem(item) => {
            ctx.push_raw("<li>");
            for child in &item.children {
                render_node(child, ctx, renderer);
            }
            ctx.push_raw("</li>");
        }
        Node::Code(code) => render_code(code, ctx, renderer),
        Node::Blockquote(quote) => render_blockquote(quote, ctx, renderer),
        Node::Image(img) => render_image(img, ctx),
        Node::ThematicBreak(_) => ctx.push_raw("<hr />"),
        Node::Break(_) => ctx.push_raw("<br />"),
        // Documents are trusted content; raw HTML passes through as written.
        Node::Html(html) => ctx.push_raw(&html.value),
        Node::Delete(delete) => {
            ctx.push_raw("<del>");
            for child in &delete.children {
                render_node(child, ctx, renderer);
            }
            ctx.push_raw("</del>");
        }
        Node::Table(table) => render_table(table, ctx, renderer),
        Node::TableRow(_) => {}
        Node::TableCell(_) => {}
        _ => {
            log::warn!("Unhandled markdown node type: {:?}", node);
        }
    }
}
