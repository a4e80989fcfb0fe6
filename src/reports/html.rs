//! Interactive HTML renderer.

use super::escape::{escape_html, escape_script_json};
use super::{ReportError, ReportFormat, TreeRenderer};
use crate::forest::build_tree;
use crate::model::Graph;
use std::fmt::Write;

const DEFAULT_TITLE: &str = "SBOM Dependency Tree";

/// Self-contained HTML page with a collapsible, searchable tree.
///
/// The tree is embedded as JSON and built client-side; labels are inserted
/// as text nodes so component names never reach the page as markup.
pub struct HtmlRenderer {
    /// Include inline CSS
    include_styles: bool,
}

impl HtmlRenderer {
    /// Create a new HTML renderer
    #[must_use]
    pub const fn new() -> Self {
        Self {
            include_styles: true,
        }
    }

    fn title(graph: &Graph) -> String {
        match graph.document.name.as_deref() {
            Some(name) => format!("{DEFAULT_TITLE}: {name}"),
            None => DEFAULT_TITLE.to_string(),
        }
    }

    fn get_styles(&self) -> &'static str {
        r#"
        <style>
            :root {
                --indent: 28px;
                --btn: 20px;
                --font: 13px ui-monospace, SFMono-Regular, Menlo, Consolas, "Liberation Mono", monospace;
                --line: #9ca3af;
                --path: #16a34a;
                --parent-line: #dc2626;
            }

            body {
                margin: 0;
                font-family: system-ui, -apple-system, 'Segoe UI', Roboto, sans-serif;
            }

            header {
                padding: 12px 16px;
                background: #111827;
                color: #e5e7eb;
            }

            header h1 { margin: 0; font-size: 1.3em; }
            header .meta { color: #9ca3af; font-size: 0.85em; }

            main { padding: 12px 16px; }

            .controls {
                display: flex;
                gap: 10px;
                flex-wrap: wrap;
                align-items: center;
                margin-bottom: 10px;
            }

            input[type="search"], button {
                padding: 6px 10px;
                border: 1px solid #d1d5db;
                border-radius: 8px;
            }

            button { background: #f9fafb; cursor: pointer; }
            button:hover { background: #eef2ff; }

            #viewport {
                height: 78vh;
                border: 1px solid #e5e7eb;
                border-radius: 10px;
                overflow: auto;
            }

            ul.tree { list-style: none; margin: 0; padding: 10px 12px; font: var(--font); }
            ul.tree ul { list-style: none; margin: 0; padding-left: var(--indent); position: relative; }
            ul.tree ul::before {
                content: "";
                position: absolute;
                left: calc(var(--btn) / 2);
                top: 0;
                bottom: 0;
                border-left: 2px solid var(--line);
            }
            ul.tree ul.parent-v::before { border-left-color: var(--parent-line); }

            li.node { position: relative; margin: 4px 0; }
            li.node::before {
                content: "";
                position: absolute;
                left: calc(var(--btn) / 2);
                top: calc(var(--btn) / 2 - 1px);
                width: calc(var(--indent) - var(--btn) / 2);
                border-top: 2px solid var(--line);
            }
            ul.tree > li.node::before { display: none; }
            li.node.parent-link::before { border-top-color: var(--parent-line); }

            .row {
                display: flex;
                align-items: flex-start;
                gap: 10px;
                padding: 2px 6px;
                border: 2px dashed transparent;
                border-radius: 4px;
            }

            .btn {
                position: relative;
                flex: none;
                width: var(--btn);
                height: var(--btn);
                border-radius: 50%;
                display: flex;
                align-items: center;
                justify-content: center;
                font-size: 12px;
                font-weight: 600;
                background: #111827;
                color: #fff;
                cursor: pointer;
            }

            .btn.leaf { background: #e5e7eb; color: #374151; cursor: default; }
            .label { overflow-wrap: anywhere; }
            .badge { color: #6b7280; font-size: 11px; margin-left: 4px; }
            .collapsed > ul { display: none; }
            .match > .row .label { background: #fff7ed; outline: 1px solid #fed7aa; }
            li.node.active > .row, li.node.ancestor > .row { border-color: var(--path); }
        </style>
        "#
    }

    fn get_script(&self) -> &'static str {
        r##"
const $ = (sel, root = document) => root.querySelector(sel);
const $$ = (sel, root = document) => Array.from(root.querySelectorAll(sel));
const hasKids = n => Array.isArray(n.children) && n.children.length > 0;

let pinned = [];

function el(tag, cls, ...kids) {
  const e = document.createElement(tag);
  if (cls) e.className = cls;
  for (const k of kids) {
    if (k != null) e.appendChild(typeof k === "string" ? document.createTextNode(k) : k);
  }
  return e;
}

function setOpen(li, open) {
  li.classList.toggle("expanded", open);
  li.classList.toggle("collapsed", !open);
  const btn = li.querySelector(":scope > .row .btn");
  if (btn && !btn.classList.contains("leaf")) btn.textContent = open ? "−" : "+";
}

function clearPinned() {
  for (const e of pinned) e.classList.remove("active", "ancestor", "parent-link", "parent-v");
  pinned = [];
}

function pin(li) {
  const wasActive = li.classList.contains("active");
  clearPinned();
  if (wasActive) return;
  li.classList.add("active", "parent-link");
  pinned.push(li);
  for (let p = li.parentElement; p && p.id !== "tree"; p = p.parentElement) {
    if (p.tagName === "UL") {
      p.classList.add("parent-v");
      pinned.push(p);
    } else if (p.classList.contains("node")) {
      p.classList.add("ancestor", "parent-link");
      pinned.push(p);
    }
  }
}

function build(n, depth) {
  const leaf = !hasKids(n);
  const li = el("li", "node " + (depth === 0 ? "expanded" : "collapsed"));
  const btn = el("div", "btn" + (leaf ? " leaf" : ""), leaf ? "•" : (depth === 0 ? "−" : "+"));
  const badge = leaf ? null : el("span", "badge", "(" + n.children.length + ")");
  const row = el("div", "row", btn, el("div", "label", n.name || ""), badge);
  li.appendChild(row);
  if (!leaf) {
    const ul = el("ul");
    for (const c of n.children) ul.appendChild(build(c, depth + 1));
    li.appendChild(ul);
    btn.addEventListener("click", e => {
      e.stopPropagation();
      setOpen(li, !li.classList.contains("expanded"));
    });
  }
  row.addEventListener("click", e => { if (e.target !== btn) pin(li); });
  return li;
}

function search(term) {
  const status = $("#status");
  $$("#tree li.match").forEach(li => li.classList.remove("match"));
  if (!term) { status.textContent = ""; return; }
  term = term.toLowerCase();
  let hits = 0;
  $$("#tree li.node > .row .label").forEach(label => {
    if (!(label.textContent || "").toLowerCase().includes(term)) return;
    hits++;
    const li = label.closest("li.node");
    li.classList.add("match");
    for (let p = li.parentElement; p && p.id !== "tree"; p = p.parentElement) {
      if (p.classList.contains("node")) setOpen(p, true);
    }
  });
  status.textContent = hits ? "Found " + hits + " match(es)" : "No matches";
}

if (data) $("#tree").appendChild(build(data, 0));

$("#expand").onclick = () => $$("#tree li.node.collapsed").forEach(li => setOpen(li, true));
$("#collapse").onclick = () => $$("#tree li.node.expanded").forEach(li => {
  if (li.parentElement.id !== "tree") setOpen(li, false);
});
$("#clear").onclick = clearPinned;
$("#q").addEventListener("keydown", e => { if (e.key === "Enter") search(e.target.value.trim()); });
document.addEventListener("keydown", e => { if (e.key === "Escape") clearPinned(); });
"##
    }
}

impl Default for HtmlRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TreeRenderer for HtmlRenderer {
    fn render(&self, graph: &Graph, roots: &[String]) -> Result<String, ReportError> {
        let tree = build_tree(graph, roots);
        let data = escape_script_json(&serde_json::to_string(&tree)?);
        let title = escape_html(&Self::title(graph));

        let mut html = String::new();

        // HTML header
        writeln!(html, "<!DOCTYPE html>")?;
        writeln!(html, "<html lang=\"en\">")?;
        writeln!(html, "<head>")?;
        writeln!(html, "    <meta charset=\"UTF-8\">")?;
        writeln!(
            html,
            "    <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">"
        )?;
        writeln!(html, "    <title>{title}</title>")?;
        if self.include_styles {
            writeln!(html, "{}", self.get_styles())?;
        }
        writeln!(html, "</head>")?;
        writeln!(html, "<body>")?;

        writeln!(html, "<header>")?;
        writeln!(html, "    <h1>{title}</h1>")?;
        writeln!(
            html,
            "    <div class=\"meta\">{} {} &middot; {} nodes &middot; {} edges &middot; {} root(s)</div>",
            graph.document.format,
            escape_html(graph.document.spec_version.as_deref().unwrap_or("")),
            graph.node_count(),
            graph.edge_count(),
            roots.len()
        )?;
        writeln!(html, "</header>")?;

        writeln!(html, "<main>")?;
        writeln!(html, "    <div class=\"controls\">")?;
        writeln!(
            html,
            "        <input id=\"q\" type=\"search\" placeholder=\"Search (Enter)\">"
        )?;
        writeln!(html, "        <button id=\"expand\">Expand all</button>")?;
        writeln!(html, "        <button id=\"collapse\">Collapse all</button>")?;
        writeln!(html, "        <button id=\"clear\">Clear selection</button>")?;
        writeln!(html, "        <span id=\"status\"></span>")?;
        writeln!(html, "    </div>")?;
        writeln!(
            html,
            "    <div id=\"viewport\"><ul id=\"tree\" class=\"tree\"></ul></div>"
        )?;
        writeln!(html, "</main>")?;

        writeln!(html, "<script>")?;
        writeln!(html, "const data = {data};")?;
        writeln!(html, "{}", self.get_script())?;
        writeln!(html, "</script>")?;
        writeln!(html, "</body>")?;
        writeln!(html, "</html>")?;

        Ok(html)
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Html
    }
}
