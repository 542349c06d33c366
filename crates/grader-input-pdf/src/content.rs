//! Content-stream walker that turns text-showing operators into fragments.
//!
//! Implements the subset of the PDF text-rendering state machine needed to
//! place each shown string vertically and estimate its font size:
//!
//! | Operator | Action |
//! |----------|--------|
//! | `q`/`Q`  | Save/restore graphics state |
//! | `cm`     | Concatenate the current transformation matrix |
//! | `BT`     | Begin text object -- reset matrices |
//! | `Tf`     | Set font and size |
//! | `Tm`     | Set text matrix |
//! | `Td`/`TD`| Translate text position (`TD` also sets leading) |
//! | `T*`     | Move to start of next line |
//! | `TL`     | Set text leading |
//! | `Ts`     | Set text rise |
//! | `Tj`/`TJ`| Show text |
//! | `'`/`"`  | Next line, then show text |
//!
//! Horizontal advance after a show is not tracked: it never changes the
//! vertical position of unrotated text.

use lopdf::content::Operation;
use lopdf::Object;

use grader_core::document::Fragment;

type Matrix = [f64; 6];

const IDENTITY: Matrix = [1.0, 0.0, 0.0, 1.0, 0.0, 0.0];

/// Kerning adjustment (thousandths of an em) above which a `TJ` gap counts as a space.
const TJ_SPACE_THRESHOLD: f64 = 200.0;

/// Resolves font resources for one page.
pub trait FontResolver {
    /// Decode a shown string using the font registered under `font_key`.
    fn decode(&self, font_key: &[u8], bytes: &[u8]) -> String;

    /// Human-readable font name for `font_key`, if known.
    fn font_name(&self, font_key: &[u8]) -> Option<String>;
}

/// `m1 × m2` in PDF row-vector convention.
fn multiply(m1: &Matrix, m2: &Matrix) -> Matrix {
    [
        m1[0] * m2[0] + m1[1] * m2[2],
        m1[0] * m2[1] + m1[1] * m2[3],
        m1[2] * m2[0] + m1[3] * m2[2],
        m1[2] * m2[1] + m1[3] * m2[3],
        m1[4] * m2[0] + m1[5] * m2[2] + m2[4],
        m1[4] * m2[1] + m1[5] * m2[3] + m2[5],
    ]
}

#[derive(Debug, Clone)]
struct TextState {
    ctm: Matrix,
    text_matrix: Matrix,
    line_matrix: Matrix,
    font_key: Vec<u8>,
    font_size: f64,
    leading: f64,
    rise: f64,
}

impl Default for TextState {
    fn default() -> Self {
        Self {
            ctm: IDENTITY,
            text_matrix: IDENTITY,
            line_matrix: IDENTITY,
            font_key: Vec::new(),
            font_size: 0.0,
            leading: 0.0,
            rise: 0.0,
        }
    }
}

impl TextState {
    fn translate_line(&mut self, tx: f64, ty: f64) {
        self.line_matrix = multiply(&[1.0, 0.0, 0.0, 1.0, tx, ty], &self.line_matrix);
        self.text_matrix = self.line_matrix;
    }

    /// Text rendering matrix: `[size 0 0 size 0 rise] × Tm × CTM`.
    fn rendering_matrix(&self) -> Matrix {
        let params = [self.font_size, 0.0, 0.0, self.font_size, 0.0, self.rise];
        multiply(&multiply(&params, &self.text_matrix), &self.ctm)
    }
}

/// Larger of the horizontal and vertical scale magnitudes, rounded to 0.01pt.
fn scale_of(m: &Matrix) -> f64 {
    let horizontal = m[0].hypot(m[1]);
    let vertical = m[2].hypot(m[3]);
    (horizontal.max(vertical) * 100.0).round() / 100.0
}

fn get_number(obj: &Object) -> Option<f64> {
    match obj {
        Object::Integer(i) => Some(*i as f64),
        Object::Real(r) => Some(*r as f64),
        _ => None,
    }
}

fn numbers<const N: usize>(operands: &[Object]) -> Option<[f64; N]> {
    if operands.len() < N {
        return None;
    }
    let mut out = [0.0; N];
    for (slot, obj) in out.iter_mut().zip(operands) {
        *slot = get_number(obj)?;
    }
    Some(out)
}

/// Walk one page's operations and emit a fragment per shown string.
pub fn collect_fragments(
    page: u32,
    operations: &[Operation],
    fonts: &dyn FontResolver,
) -> Vec<Fragment> {
    let mut state = TextState::default();
    let mut saved: Vec<TextState> = Vec::new();
    let mut fragments = Vec::new();

    for op in operations {
        match op.operator.as_str() {
            "q" => saved.push(state.clone()),
            "Q" => {
                if let Some(prev) = saved.pop() {
                    state = prev;
                }
            }
            "cm" => {
                if let Some(m) = numbers::<6>(&op.operands) {
                    state.ctm = multiply(&m, &state.ctm);
                }
            }
            "BT" => {
                state.text_matrix = IDENTITY;
                state.line_matrix = IDENTITY;
            }
            "Tf" => {
                if op.operands.len() >= 2 {
                    if let Object::Name(key) = &op.operands[0] {
                        state.font_key = key.clone();
                    }
                    state.font_size = get_number(&op.operands[1]).unwrap_or(0.0);
                }
            }
            "Tm" => {
                if let Some(m) = numbers::<6>(&op.operands) {
                    state.text_matrix = m;
                    state.line_matrix = m;
                }
            }
            "Td" => {
                if let Some([tx, ty]) = numbers::<2>(&op.operands) {
                    state.translate_line(tx, ty);
                }
            }
            "TD" => {
                if let Some([tx, ty]) = numbers::<2>(&op.operands) {
                    state.leading = -ty;
                    state.translate_line(tx, ty);
                }
            }
            "T*" => {
                let leading = state.leading;
                state.translate_line(0.0, -leading);
            }
            "TL" => {
                if let Some(v) = op.operands.first().and_then(get_number) {
                    state.leading = v;
                }
            }
            "Ts" => {
                if let Some(v) = op.operands.first().and_then(get_number) {
                    state.rise = v;
                }
            }
            "Tj" => {
                if let Some(Object::String(bytes, _)) = op.operands.first() {
                    let text = fonts.decode(&state.font_key, bytes);
                    emit(page, text, &state, fonts, &mut fragments);
                }
            }
            "TJ" => {
                if let Some(Object::Array(items)) = op.operands.first() {
                    let text = decode_tj_array(items, &state.font_key, fonts);
                    emit(page, text, &state, fonts, &mut fragments);
                }
            }
            "'" => {
                let leading = state.leading;
                state.translate_line(0.0, -leading);
                if let Some(Object::String(bytes, _)) = op.operands.first() {
                    let text = fonts.decode(&state.font_key, bytes);
                    emit(page, text, &state, fonts, &mut fragments);
                }
            }
            "\"" => {
                let leading = state.leading;
                state.translate_line(0.0, -leading);
                if let Some(Object::String(bytes, _)) = op.operands.get(2) {
                    let text = fonts.decode(&state.font_key, bytes);
                    emit(page, text, &state, fonts, &mut fragments);
                }
            }
            _ => {}
        }
    }

    fragments
}

/// Concatenate a `TJ` array, inserting a space for wide kerning gaps.
fn decode_tj_array(items: &[Object], font_key: &[u8], fonts: &dyn FontResolver) -> String {
    let mut combined = String::new();
    for item in items {
        match item {
            Object::String(bytes, _) => combined.push_str(&fonts.decode(font_key, bytes)),
            other => {
                if let Some(n) = get_number(other) {
                    if -n > TJ_SPACE_THRESHOLD && !combined.is_empty() && !combined.ends_with(' ') {
                        combined.push(' ');
                    }
                }
            }
        }
    }
    combined
}

fn emit(
    page: u32,
    text: String,
    state: &TextState,
    fonts: &dyn FontResolver,
    fragments: &mut Vec<Fragment>,
) {
    if text.is_empty() {
        return;
    }
    let trm = state.rendering_matrix();
    fragments.push(Fragment {
        content: text,
        page,
        vertical_position: trm[5],
        font_size_pt: scale_of(&trm),
        font_name: fonts.font_name(&state.font_key),
    });
}
