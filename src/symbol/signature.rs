// Thu Jan 15 2026 - Alex

use std::fmt;

/// A demangled method name split into its parts, e.g.
/// `SwiftHookTests.TestClass.print(str: Swift.String) -> ()`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodSignature {
    pub type_path: String,
    pub method: String,
    pub parameters: String,
    pub return_type: String,
}

impl MethodSignature {
    /// Parses `Type.Path.method(params) -> Return`.
    ///
    /// Accessors and other entries without a parenthesized parameter list
    /// return `None`.
    pub fn parse(readable: &str) -> Option<Self> {
        let open = readable.find('(')?;
        let (type_path, method) = readable[..open].rsplit_once('.')?;
        if type_path.is_empty() || method.is_empty() {
            return None;
        }

        let mut depth = 0usize;
        let mut close = None;
        for (i, c) in readable[open..].char_indices() {
            match c {
                '(' => depth += 1,
                ')' => {
                    depth -= 1;
                    if depth == 0 {
                        close = Some(open + i);
                        break;
                    }
                }
                _ => {}
            }
        }
        let close = close?;

        let return_type = readable[close + 1..].strip_prefix(" -> ")?;
        if return_type.is_empty() {
            return None;
        }

        Some(Self {
            type_path: type_path.to_string(),
            method: method.to_string(),
            parameters: readable[open + 1..close].to_string(),
            return_type: return_type.to_string(),
        })
    }
}

impl fmt::Display for MethodSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}.{}({}) -> {}",
            self.type_path, self.method, self.parameters, self.return_type
        )
    }
}
