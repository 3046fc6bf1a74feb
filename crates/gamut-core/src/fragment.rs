//! Shader fragments and typed function names.
//!
//! A [`ShaderFragment`] is an immutable piece of GLSL source defining
//! exactly one function, plus the symbolic names of the functions its body
//! calls. Fragments are the unit of composition: generators produce them,
//! the composer orders and concatenates them.
//!
//! Function names are carried as [`FunctionName`] values rather than free
//! string literals, so a generator and the composer can only ever disagree
//! about a name by referencing two different constants.

use std::fmt;

/// Typed symbolic name of a GLSL function.
///
/// Wraps the raw GLSL identifier. Generators export their names as
/// `const` values of this type; the composer compares names structurally,
/// never by ad-hoc string literals.
///
/// # Example
///
/// ```rust
/// use gamut_core::FunctionName;
///
/// const GAMUT_MAP: FunctionName = FunctionName::new("gamutMap");
/// assert_eq!(GAMUT_MAP.as_str(), "gamutMap");
/// assert_eq!(GAMUT_MAP.to_string(), "gamutMap");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FunctionName(&'static str);

impl FunctionName {
    /// Creates a function name from a GLSL identifier.
    #[inline]
    pub const fn new(name: &'static str) -> Self {
        Self(name)
    }

    /// The raw GLSL identifier.
    #[inline]
    pub const fn as_str(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for FunctionName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

impl AsRef<str> for FunctionName {
    fn as_ref(&self) -> &str {
        self.0
    }
}

/// One immutable fragment of GLSL source defining a single function.
///
/// # Invariants
///
/// - `name` is the function the source defines; the identifier appears
///   verbatim in the source text ([`defines_declared_name`](Self::defines_declared_name)).
/// - `calls` lists every function the body references that lives in a
///   *different* fragment; the composer uses it to order fragments
///   dependencies-first.
/// - Fragments own no mutable state and are cheap to clone.
///
/// # Example
///
/// ```rust
/// use gamut_core::{FunctionName, ShaderFragment};
///
/// const LUMA: FunctionName = FunctionName::new("luma709");
/// const TONE: FunctionName = FunctionName::new("toneScale");
///
/// let tone = ShaderFragment::new(
///     TONE,
///     "vec3 toneScale(vec3 color) {\n    return color / (1.0 + luma709(color));\n}",
/// )
/// .with_call(LUMA);
///
/// assert_eq!(tone.calls(), &[LUMA]);
/// assert!(tone.defines_declared_name());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShaderFragment {
    name: FunctionName,
    source: String,
    calls: Vec<FunctionName>,
}

impl ShaderFragment {
    /// Creates a fragment defining `name` with the given GLSL source.
    pub fn new(name: FunctionName, source: impl Into<String>) -> Self {
        Self {
            name,
            source: source.into(),
            calls: Vec::new(),
        }
    }

    /// Declares that this fragment's body calls `name`.
    ///
    /// Chainable; order of declaration is preserved.
    #[must_use]
    pub fn with_call(mut self, name: FunctionName) -> Self {
        self.calls.push(name);
        self
    }

    /// The function this fragment defines.
    #[inline]
    pub fn name(&self) -> FunctionName {
        self.name
    }

    /// The GLSL source text.
    #[inline]
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Functions this fragment's body calls, in declaration order.
    #[inline]
    pub fn calls(&self) -> &[FunctionName] {
        &self.calls
    }

    /// Checks that the declared function name appears in the source.
    ///
    /// A cheap textual sanity check, not a GLSL parse. The composer runs
    /// it at registration time so a mislabeled fragment is rejected before
    /// it can produce an unresolvable program.
    pub fn defines_declared_name(&self) -> bool {
        self.source.contains(self.name.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const F: FunctionName = FunctionName::new("f");
    const G: FunctionName = FunctionName::new("g");

    #[test]
    fn test_function_name_display() {
        assert_eq!(F.to_string(), "f");
        assert_eq!(F.as_str(), "f");
        assert_eq!(F, FunctionName::new("f"));
        assert_ne!(F, G);
    }

    #[test]
    fn test_fragment_accessors() {
        let frag = ShaderFragment::new(F, "vec3 f(vec3 c) { return g(c); }").with_call(G);
        assert_eq!(frag.name(), F);
        assert_eq!(frag.calls(), &[G]);
        assert!(frag.source().contains("vec3 f"));
    }

    #[test]
    fn test_defines_declared_name() {
        let good = ShaderFragment::new(F, "vec3 f(vec3 c) { return c; }");
        assert!(good.defines_declared_name());

        let bad = ShaderFragment::new(F, "vec3 other(vec3 c) { return c; }");
        assert!(!bad.defines_declared_name());
    }

    #[test]
    fn test_call_order_preserved() {
        let frag = ShaderFragment::new(F, "vec3 f(vec3 c) { return g(c); }")
            .with_call(G)
            .with_call(FunctionName::new("h"));
        assert_eq!(frag.calls()[0], G);
        assert_eq!(frag.calls()[1].as_str(), "h");
    }
}
