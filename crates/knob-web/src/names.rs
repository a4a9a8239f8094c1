// Attribute names, ids and filter matrices for the SVG layer.
// Pure string helpers; no DOM access so they can be tested on the host.

// SVG attributes that are camelCase in the DOM itself.
const CAMEL_CASE_ATTRIBUTES: &[&str] = &[
    "viewBox",
    "preserveAspectRatio",
    "stdDeviation",
    "gradientUnits",
    "gradientTransform",
    "maskUnits",
    "maskContentUnits",
    "filterUnits",
    "primitiveUnits",
    "pathLength",
];

/// `strokeWidth` -> `stroke-width`. Names without capitals, and attributes
/// SVG spells in camelCase (`viewBox`), pass through.
pub fn kebab_case(name: &str) -> String {
    if CAMEL_CASE_ATTRIBUTES.contains(&name) {
        return name.to_string();
    }
    let mut out = String::with_capacity(name.len() + 4);
    for c in name.chars() {
        if c.is_ascii_uppercase() {
            out.push('-');
            out.push(c.to_ascii_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}

#[inline]
pub fn url_ref(id: &str) -> String {
    format!("url(#{id})")
}

/// Unique id for per-instance definitions such as a dial's grip mask.
#[inline]
pub fn instance_id(prefix: &str, n: u32) -> String {
    format!("{prefix}--{n}")
}

/// `feColorMatrix` values scaling rgb by `coeff` and adding `offset`.
pub fn darken_matrix(coeff: f64, offset: f64) -> String {
    format!(
        "{coeff} 0 0 0 {offset}  0 {coeff} 0 0 {offset}  0 0 {coeff} 0 {offset}  0 0 0 1 0"
    )
}

/// Gradient stop offset attribute.
#[inline]
pub fn percent(offset: f64) -> String {
    format!("{offset}%")
}
