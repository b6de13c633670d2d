//! In-page JavaScript used by [`super::CdpPage`].
//!
//! Arguments are embedded as JSON literals, which are valid JavaScript.

use serde_json::Value;

/// Collect attributes of form controls, capped at `limit`.
pub(super) fn form_elements(limit: usize) -> String {
    format!(
        r#"(() => {{
  const limit = {limit};
  const attr = (el, name) => {{
    const v = el.getAttribute(name);
    return v === null ? null : v;
  }};
  const out = [];
  for (const el of document.querySelectorAll('form input, form button, form textarea, form select')) {{
    if (out.length >= limit) break;
    const text = (el.innerText || el.textContent || '').trim();
    out.push({{
      tag: el.tagName.toLowerCase(),
      type: attr(el, 'type'),
      id: el.id || null,
      name: attr(el, 'name'),
      placeholder: attr(el, 'placeholder'),
      aria_label: attr(el, 'aria-label'),
      text: text || null,
    }});
  }}
  return out;
}})()"#
    )
}

/// Focus the element matched by a CSS selector.
///
/// Evaluates to `"ok"`, `"missing"` or `"invalid"`.
pub(super) fn focus_css(selector: &str) -> String {
    format!(
        r#"((selector) => {{
  let el;
  try {{ el = document.querySelector(selector); }} catch (e) {{ return 'invalid'; }}
  if (!el) return 'missing';
  el.scrollIntoView({{block: 'center', inline: 'center'}});
  el.focus();
  return 'ok';
}})({})"#,
        literal(selector)
    )
}

/// Locate the innermost visible element whose text contains `text`
/// (case-insensitive, whitespace-collapsed), scroll it into view and
/// evaluate to its center point, or `null`. With `focus` the element is
/// also focused.
pub(super) fn locate_text(text: &str, focus: bool) -> String {
    format!(
        r#"((needle, focus) => {{
  const norm = (s) => (s || '').replace(/\s+/g, ' ').trim().toLowerCase();
  const want = norm(needle);
  if (!want || !document.body) return null;
  const textOf = (el) => norm(el.innerText || el.value || el.getAttribute('aria-label') || '');
  const visible = (el) => {{
    const r = el.getBoundingClientRect();
    if (r.width === 0 || r.height === 0) return false;
    const st = window.getComputedStyle(el);
    return st.visibility !== 'hidden' && st.display !== 'none' && Number(st.opacity) !== 0;
  }};
  for (const el of document.body.querySelectorAll('*')) {{
    if (!textOf(el).includes(want)) continue;
    if ([...el.children].some((c) => textOf(c).includes(want))) continue;
    if (!visible(el)) continue;
    el.scrollIntoView({{block: 'center', inline: 'center'}});
    if (focus) el.focus();
    const r = el.getBoundingClientRect();
    return {{x: r.left + r.width / 2, y: r.top + r.height / 2}};
  }}
  return null;
}})({}, {})"#,
        literal(text),
        focus
    )
}

fn literal(value: &str) -> String {
    Value::String(value.to_string()).to_string()
}
