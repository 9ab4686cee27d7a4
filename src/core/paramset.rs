use std::cell::Cell;
use std::fmt::{self, Display, Formatter};
use log::warn;
use crate::core::pbrt::Float;
use crate::pbrtparser::syntax::Value;

macro_rules! find_one {
    ($x:ident, $conv:ident, $t:ty) => {
        pub fn $x(&self, name: &str, d: $t) -> $t {
            self.get(name)
                .and_then(|e| scalar(&e.value))
                .and_then(|v| v.$conv())
                .unwrap_or(d)
        }
    }
}

macro_rules! find {
    ($x:ident, $conv:ident, $t:ty) => {
        pub fn $x(&self, name: &str) -> Option<Vec<$t>> {
            self.get(name).and_then(|e| e.value.$conv())
        }
    }
}

/// A one-element list stands for its only element.
fn scalar(v: &Value) -> Option<&Value> {
    match v {
        Value::List(l) if l.len() == 1 => Some(&l[0]),
        Value::List(_)                 => None,
        v                              => Some(v)
    }
}

#[derive(Debug, Clone)]
pub struct ParamSetItem {
    pub name        : String,
    /// Type tag of the declaration (`float`, `rgb`, `texture`, ...).
    pub ty          : Option<String>,
    pub value       : Value,
    pub looked_up   : Cell<bool>
}

impl ParamSetItem {
    /// Splits a declaration such as `"float radius"` into tag and name. A
    /// key without a tag is kept verbatim.
    pub fn new(key: &str, value: Value) -> Self {
        let words: Vec<&str> = key.split_whitespace().collect();

        let (ty, name) = if words.len() >= 2 {
            (Some(words[0].to_owned()), words[words.len() - 1].to_owned())
        } else {
            (None, key.to_owned())
        };

        Self {
            name,
            ty,
            value,
            looked_up: Cell::new(false)
        }
    }

    pub fn is_type(&self, ty: &str) -> bool {
        self.ty.as_deref() == Some(ty)
    }

    /// The value as a single element, unwrapping a one-element list.
    pub fn scalar(&self) -> Option<&Value> {
        scalar(&self.value)
    }
}

#[derive(Debug, Default, Clone)]
pub struct ParamSet {
    pub items: Vec<ParamSetItem>
}

impl ParamSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn erase(&mut self, name: &str) -> bool {
        let pos = self.items.iter().position(|e| e.name == name);

        pos.map(|p| self.items.remove(p)).is_some()
    }

    /// Adds a parameter, replacing an earlier one of the same name.
    pub fn add(&mut self, key: &str, value: Value) {
        let item = ParamSetItem::new(key, value);
        self.erase(&item.name);
        self.items.push(item);
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.items.iter().any(|e| e.name == name)
    }

    /// Looks up a parameter and marks it as used.
    pub fn get(&self, name: &str) -> Option<&ParamSetItem> {
        let found = self.items.iter().find(|e| e.name == name);

        if let Some(e) = found {
            e.looked_up.set(true);
        }

        found
    }

    /// Type tag of a parameter without marking it as used.
    pub fn type_of(&self, name: &str) -> Option<&str> {
        self.items
            .iter()
            .find(|e| e.name == name)
            .and_then(|e| e.ty.as_deref())
    }

    find_one!(find_one_float, as_float, Float);
    find_one!(find_one_int, as_int, i64);

    find!(find_floats, as_floats, Float);
    find!(find_ints, as_ints, i64);
    find!(find_strings, as_strings, String);

    pub fn find_one_string(&self, name: &str, d: &str) -> String {
        self.get(name)
            .and_then(|e| scalar(&e.value))
            .and_then(|v| v.as_str())
            .unwrap_or(d)
            .to_owned()
    }

    pub fn find_one_bool(&self, name: &str, d: bool) -> bool {
        match self.get(name).and_then(|e| scalar(&e.value)) {
            Some(Value::Str(s)) if s == "true"  => true,
            Some(Value::Str(s)) if s == "false" => false,
            Some(Value::Int(i))                 => *i != 0,
            _                                   => d
        }
    }

    /// Name of the texture bound to `name`, if the parameter is declared
    /// with the `texture` tag.
    pub fn find_texture(&self, name: &str) -> Option<String> {
        self.items
            .iter()
            .find(|e| e.name == name && e.is_type("texture"))
            .and_then(|e| {
                e.looked_up.set(true);
                scalar(&e.value).and_then(|v| v.as_str()).map(|s| s.to_owned())
            })
    }

    pub fn report_unused(&self) {
        self.items
            .iter()
            .filter(|n| !n.looked_up.get())
            .for_each(|x| warn!("Parameter \"{}\" not used", x.name));
    }

    pub fn unused(&self) -> Vec<&str> {
        self.items
            .iter()
            .filter(|n| !n.looked_up.get())
            .map(|x| x.name.as_str())
            .collect()
    }
}

impl Display for ParamSet {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for item in self.items.iter() {
            match item.ty {
                Some(ref ty) => write!(f, " \"{} {}\" {}", ty, item.name, item.value)?,
                None         => write!(f, " \"{}\" {}", item.name, item.value)?
            }
        }

        Ok(())
    }
}
