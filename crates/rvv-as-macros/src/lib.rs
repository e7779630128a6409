//! Compile-time encoding proc-macros for `rvv-as`.
//!
//! Provides [`rvv_word!`] and [`rvv_bytes!`], which encode one line of
//! vector assembly at compile time with zero runtime overhead.
//!
//! # Usage
//!
//! ```rust,ignore
//! use rvv_as_macros::{rvv_bytes, rvv_word};
//!
//! const VAND: u32 = rvv_word!("vand.vv v31, v0, v0");
//! const VSRL: [u8; 4] = rvv_bytes!("vsrl.vi v0, v0, 1");
//! ```

use proc_macro::{Delimiter, Span, TokenStream, TokenTree};

/// Encode one instruction at compile time, producing a `u32` constant.
///
/// # Examples
///
/// ```rust,ignore
/// use rvv_as_macros::rvv_word;
///
/// const W: u32 = rvv_word!("vrgather.vv v1, v0, v0");
/// assert_eq!(W, 0x320000d7);
/// ```
///
/// # Compile-time errors
///
/// If the line does not encode, the macro emits a compile-time error carrying
/// the full `EncodeError` message at the literal's span:
///
/// ```compile_fail
/// const W: u32 = rvv_as_macros::rvv_word!("vand.vv v32, v0, v0");
/// ```
///
/// ```compile_fail
/// const W: u32 = rvv_as_macros::rvv_word!("vadd.vv v0, v0, v0");
/// ```
///
/// ```compile_fail
/// const W: u32 = rvv_as_macros::rvv_word!("vsrl.vi v0, v0, 32");
/// ```
///
/// Anything other than a single string literal is rejected too:
///
/// ```compile_fail
/// const W: u32 = rvv_as_macros::rvv_word!("vand.vv v0, v0, v0", 1);
/// ```
///
/// ```compile_fail
/// const W: u32 = rvv_as_macros::rvv_word!("vand.vv v0, v0, v0" "vand.vv v0, v0, v0");
/// ```
///
/// ```compile_fail
/// const W: u32 = rvv_as_macros::rvv_word!(b"vand.vv v0, v0, v0");
/// ```
///
/// ```compile_fail
/// const W: u32 = rvv_as_macros::rvv_word!();
/// ```
#[proc_macro]
pub fn rvv_word(input: TokenStream) -> TokenStream {
    match rvv_word_impl(input) {
        Ok(ts) => ts,
        Err(err) => err.into_compile_error(),
    }
}

/// Encode one instruction at compile time, producing a little-endian `[u8; 4]`.
///
/// # Examples
///
/// ```rust,ignore
/// use rvv_as_macros::rvv_bytes;
///
/// const B: [u8; 4] = rvv_bytes!("vand.vv v0, v0, v0");
/// assert_eq!(B, [0x57, 0x00, 0x00, 0x26]);
/// ```
///
/// Errors are reported the same way as for [`rvv_word!`]:
///
/// ```compile_fail
/// const B: [u8; 4] = rvv_as_macros::rvv_bytes!("vxor.vv v0, v0");
/// ```
///
/// ```compile_fail
/// const B: [u8; 4] = rvv_as_macros::rvv_bytes!("vrgather.vv x1, v0, v0");
/// ```
#[proc_macro]
pub fn rvv_bytes(input: TokenStream) -> TokenStream {
    match rvv_bytes_impl(input) {
        Ok(ts) => ts,
        Err(err) => err.into_compile_error(),
    }
}

// ─── Implementation ─────────────────────────────────────────────────────────

fn rvv_word_impl(input: TokenStream) -> Result<TokenStream, MacroError> {
    let word = encode_input(input)?;
    Ok(word_expr(word))
}

fn rvv_bytes_impl(input: TokenStream) -> Result<TokenStream, MacroError> {
    let word = encode_input(input)?;
    Ok(bytes_expr(&word.to_le_bytes()))
}

fn encode_input(input: TokenStream) -> Result<u32, MacroError> {
    let mut tokens = input.into_iter();
    let first = tokens
        .next()
        .ok_or_else(|| MacroError::new(Span::call_site(), "expected instruction string literal"))?;
    let (source, span) = instruction_literal(first)?;

    // One trailing comma may follow: `rvv_word!("...",)`.
    let trailing = match tokens.next() {
        Some(TokenTree::Punct(p)) if p.as_char() == ',' => tokens.next(),
        other => other,
    };
    if let Some(extra) = trailing {
        return Err(MacroError::new(
            extra.span(),
            "unexpected extra tokens after instruction string",
        ));
    }

    rvv_as::assemble(&source).map_err(|e| MacroError::new(span, format!("encoding error: {e}")))
}

/// Text of a `"..."` or `r"..."` literal, plus its span for diagnostics.
fn instruction_literal(tt: TokenTree) -> Result<(String, Span), MacroError> {
    let lit = match tt {
        TokenTree::Literal(lit) => lit,
        // `macro_rules!` callers may forward the literal in an invisible group.
        TokenTree::Group(g) if g.delimiter() == Delimiter::None => {
            let mut inner = g.stream().into_iter();
            return match (inner.next(), inner.next()) {
                (Some(tt), None) => instruction_literal(tt),
                _ => Err(MacroError::new(g.span(), "expected instruction string literal")),
            };
        }
        other => {
            return Err(MacroError::new(
                other.span(),
                "expected instruction string literal",
            ))
        }
    };

    let span = lit.span();
    let repr = lit.to_string();
    let (body, is_raw) = match repr.strip_prefix('r') {
        Some(raw) => (raw.trim_matches('#'), true),
        None => (repr.as_str(), false),
    };
    let text = body
        .strip_prefix('"')
        .and_then(|s| s.strip_suffix('"'))
        .ok_or_else(|| MacroError::new(span, "expected instruction string literal"))?;

    let text = if is_raw {
        text.to_string()
    } else {
        unescape_string(text)
    };
    Ok((text, span))
}

/// Resolve the escapes that can appear in an instruction line; anything else
/// is kept verbatim and rejected later by the encoder.
fn unescape_string(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars();
    while let Some(c) = chars.next() {
        if c == '\\' {
            match chars.next() {
                Some('n') => out.push('\n'),
                Some('t') => out.push('\t'),
                Some('r') => out.push('\r'),
                Some('\\') => out.push('\\'),
                Some('"') => out.push('"'),
                Some(other) => {
                    out.push('\\');
                    out.push(other);
                }
                None => out.push('\\'),
            }
        } else {
            out.push(c);
        }
    }
    out
}

fn word_expr(word: u32) -> TokenStream {
    format!("{word:#010x}u32")
        .parse()
        .expect("generated literal should parse")
}

fn bytes_expr(bytes: &[u8; 4]) -> TokenStream {
    let inner: Vec<String> = bytes.iter().map(|b| format!("{b:#04x}u8")).collect();
    format!("[{}]", inner.join(", "))
        .parse()
        .expect("generated array should parse")
}

// ─── Diagnostics ─────────────────────────────────────────────────────────────

/// A macro failure, reported as `compile_error!` at `span`.
struct MacroError {
    span: Span,
    message: String,
}

impl MacroError {
    fn new(span: Span, message: impl Into<String>) -> Self {
        MacroError {
            span,
            message: message.into(),
        }
    }

    fn into_compile_error(self) -> TokenStream {
        let tokens: TokenStream = format!("compile_error!({:?})", self.message)
            .parse()
            .expect("compile_error! invocation should parse");
        tokens
            .into_iter()
            .map(|mut tt| {
                tt.set_span(self.span);
                tt
            })
            .collect()
    }
}
