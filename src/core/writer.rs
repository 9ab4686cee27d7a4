use crate::core::pbrt::Float;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Indent {
    Tab,
    Spaces(usize)
}

/// Line oriented emitter for `.prc` text. Each line is prefixed with the
/// current nesting depth.
#[derive(Debug, Clone)]
pub struct Writer {
    buf     : String,
    depth   : usize,
    indent  : Indent
}

impl Writer {
    pub fn new(indent: Indent) -> Self {
        Self {
            buf: String::new(),
            depth: 0,
            indent
        }
    }

    pub fn write<S: AsRef<str>>(&mut self, line: S) {
        for _ in 0..self.depth {
            match self.indent {
                Indent::Tab       => self.buf.push('\t'),
                Indent::Spaces(n) => self.buf.extend(std::iter::repeat(' ').take(n))
            }
        }

        self.buf.push_str(line.as_ref());
        self.buf.push('\n');
    }

    pub fn go_in(&mut self) {
        self.depth += 1;
    }

    pub fn go_out(&mut self) {
        assert!(self.depth > 0, "Writer::go_out called at depth 0");
        self.depth -= 1;
    }

    /// Opens a form: writes `(name` and indents.
    pub fn begin(&mut self, name: &str) {
        self.write(format!("({}", name));
        self.go_in();
    }

    pub fn end(&mut self) {
        self.go_out();
        self.write(")");
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn contents(&self) -> &str {
        &self.buf
    }

    pub fn into_string(self) -> String {
        self.buf
    }
}

/// Formats a float so it always reads back as one.
pub fn fmt_float(v: Float) -> String {
    let s = format!("{}", v);

    if s.contains('.') || s.contains('e') || s.contains("inf") || s.contains("NaN") {
        s
    } else {
        format!("{}.0", s)
    }
}

pub fn fmt_list(values: &[Float]) -> String {
    let mut s = String::from("[");

    for (i, v) in values.iter().enumerate() {
        if i > 0 { s.push(','); }
        s.push_str(&fmt_float(*v));
    }

    s.push(']');
    s
}

pub fn fmt_int_list(values: &[i64]) -> String {
    let v: Vec<String> = values.iter().map(|i| i.to_string()).collect();
    format!("[{}]", v.join(","))
}

pub fn fmt_vector(x: Float, y: Float, z: Float) -> String {
    fmt_list(&[x, y, z])
}

pub fn quote(s: &str) -> String {
    format!("'{}'", s)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indentation_follows_depth() {
        let mut w = Writer::new(Indent::Spaces(2));
        w.begin("scene");
        w.write(":name 'a'");
        w.end();

        assert_eq!(w.contents(), "(scene\n  :name 'a'\n)\n");
        assert_eq!(w.depth(), 0);
    }

    #[test]
    fn tabs_by_default() {
        let mut w = Writer::new(Indent::Tab);
        w.go_in();
        w.go_in();
        w.write("x");

        assert_eq!(w.into_string(), "\t\tx\n");
    }

    #[test]
    fn floats_keep_a_decimal_point() {
        assert_eq!(fmt_float(1.0), "1.0");
        assert_eq!(fmt_float(-0.5), "-0.5");
        assert_eq!(fmt_list(&[1.0, 0.0]), "[1.0,0.0]");
        assert_eq!(fmt_int_list(&[0, 1, 2]), "[0,1,2]");
    }

    #[test]
    #[should_panic]
    fn go_out_below_zero_panics() {
        let mut w = Writer::new(Indent::Tab);
        w.go_out();
    }
}
