//! Shader-fragment composition.
//!
//! [`ShaderComposer`] is the registry the fragment generators feed:
//! it enforces function-name uniqueness at registration, resolves the
//! call graph at assembly, and concatenates fragment sources
//! dependencies-first so every call in the emitted GLSL refers to a
//! function defined earlier in the file.
//!
//! Every failure mode the registry can introduce into a downstream GLSL
//! compile is reported here as a typed [`Error`] before any compiler sees
//! the text: duplicate definitions, calls into unregistered functions,
//! and call-graph cycles (GLSL forbids recursion).
//!
//! # Example
//!
//! ```rust
//! use gamut_glsl::{Conversion, GamutMap, ShaderComposer, GAMUT_MAP};
//!
//! let mut composer = ShaderComposer::new();
//! composer.register(Conversion::Bt2020ToBt709.fragment())?;
//! composer.register(GamutMap::Clip.code())?;
//!
//! let glsl = composer.assemble(GAMUT_MAP)?;
//! // Conversion first, gamut map second
//! assert!(glsl.find("bt2020ToBt709").unwrap() < glsl.find("gamutMap").unwrap());
//! # Ok::<(), gamut_core::Error>(())
//! ```

use std::collections::HashMap;

use gamut_core::{Error, FunctionName, Result, ShaderFragment};

/// Registry and assembler for shader fragments.
///
/// Fragments are registered once each, keyed by the function they define.
/// Assembly walks the call graph from an entry function and emits the
/// reachable fragments in dependency order. Unreachable fragments are
/// simply left out of the output.
#[derive(Debug, Default)]
pub struct ShaderComposer {
    fragments: Vec<ShaderFragment>,
    index: HashMap<FunctionName, usize>,
}

/// Visit state for the dependency walk.
#[derive(Clone, Copy, PartialEq)]
enum Mark {
    Unvisited,
    Visiting,
    Done,
}

impl ShaderComposer {
    /// Creates an empty composer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a fragment.
    ///
    /// # Errors
    ///
    /// - [`Error::DuplicateFunction`] if a fragment defining the same
    ///   function is already registered.
    /// - [`Error::MissingDefinition`] if the fragment's source does not
    ///   contain its declared function name.
    pub fn register(&mut self, fragment: ShaderFragment) -> Result<&mut Self> {
        let name = fragment.name();
        if self.index.contains_key(&name) {
            return Err(Error::duplicate_function(name.as_str()));
        }
        if !fragment.defines_declared_name() {
            return Err(Error::missing_definition(name.as_str()));
        }
        self.index.insert(name, self.fragments.len());
        self.fragments.push(fragment);
        Ok(self)
    }

    /// Number of registered fragments.
    #[inline]
    pub fn len(&self) -> usize {
        self.fragments.len()
    }

    /// Returns `true` if no fragments are registered.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }

    /// Returns `true` if a fragment defining `name` is registered.
    #[inline]
    pub fn contains(&self, name: FunctionName) -> bool {
        self.index.contains_key(&name)
    }

    /// Assembles the fragments reachable from `entry` into GLSL source.
    ///
    /// Fragments appear dependencies-first, separated by blank lines, with
    /// the entry function's fragment last. The output is the function
    /// definitions only; see [`assemble_program`](Self::assemble_program)
    /// for a complete compilable shader.
    ///
    /// # Errors
    ///
    /// - [`Error::UnresolvedFunction`] if `entry` or any transitively
    ///   called function is not registered.
    /// - [`Error::DependencyCycle`] if the call graph cycles.
    pub fn assemble(&self, entry: FunctionName) -> Result<String> {
        let order = self.resolve(entry)?;
        let sources: Vec<&str> = order.iter().map(|&i| self.fragments[i].source()).collect();
        Ok(sources.join("\n\n"))
    }

    /// Assembles a complete fragment shader around `entry`.
    ///
    /// Prepends the header (version pragma and default precision) and
    /// appends a `main()` that samples the input texture, routes the RGB
    /// through the entry function, and passes alpha through. The result
    /// can be handed to a GLSL ES compiler unmodified.
    ///
    /// # Errors
    ///
    /// Same as [`assemble`](Self::assemble).
    pub fn assemble_program(&self, entry: FunctionName, header: &ShaderHeader) -> Result<String> {
        let body = self.assemble(entry)?;
        Ok(format!(
            "{header}\n\
             uniform sampler2D inputTexture;\n\
             in vec2 textureCoord;\n\
             out vec4 fragColor;\n\
             \n\
             {body}\n\
             \n\
             void main() {{\n\
             \x20   vec4 texel = texture(inputTexture, textureCoord);\n\
             \x20   fragColor = vec4({entry}(texel.rgb), texel.a);\n\
             }}\n",
            header = header.render(),
        ))
    }

    /// Resolves the dependency order from `entry`: depth-first, post-order,
    /// deduplicated, cycle-checked.
    fn resolve(&self, entry: FunctionName) -> Result<Vec<usize>> {
        let Some(&start) = self.index.get(&entry) else {
            return Err(Error::unresolved_function(entry.as_str(), "<entry>"));
        };
        let mut marks = vec![Mark::Unvisited; self.fragments.len()];
        let mut order = Vec::new();
        self.visit(start, &mut marks, &mut order)?;
        Ok(order)
    }

    fn visit(&self, at: usize, marks: &mut [Mark], order: &mut Vec<usize>) -> Result<()> {
        match marks[at] {
            Mark::Done => return Ok(()),
            Mark::Visiting => {
                return Err(Error::dependency_cycle(self.fragments[at].name().as_str()));
            }
            Mark::Unvisited => {}
        }
        marks[at] = Mark::Visiting;
        for &call in self.fragments[at].calls() {
            let Some(&dep) = self.index.get(&call) else {
                return Err(Error::unresolved_function(
                    call.as_str(),
                    self.fragments[at].name().as_str(),
                ));
            };
            self.visit(dep, marks, order)?;
        }
        marks[at] = Mark::Done;
        order.push(at);
        Ok(())
    }
}

/// Header prepended to assembled programs.
///
/// GLSL ES 3.00 with high float precision by default, matching mobile
/// HDR playback pipelines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShaderHeader {
    /// `#version` directive payload, e.g. `"300 es"`.
    pub version: String,
    /// Default float precision qualifier, e.g. `"highp"`.
    pub precision: String,
}

impl Default for ShaderHeader {
    fn default() -> Self {
        Self {
            version: "300 es".to_string(),
            precision: "highp".to_string(),
        }
    }
}

impl ShaderHeader {
    /// Renders the header directives.
    pub fn render(&self) -> String {
        format!(
            "#version {}\nprecision {} float;\n",
            self.version, self.precision
        )
    }
}
