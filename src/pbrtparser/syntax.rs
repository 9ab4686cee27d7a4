use std::fmt::{self, Display, Formatter};
use std::path::PathBuf;
use crate::core::pbrt::Float;
use crate::core::paramset::ParamSet;

#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Str(String),
    Int(i64),
    Float(Float),
    List(Vec<Value>)
}

impl Value {
    pub fn as_float(&self) -> Option<Float> {
        match self {
            Value::Int(i)   => Some(*i as Float),
            Value::Float(f) => Some(*f),
            _               => None
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(i) => Some(*i),
            _             => None
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _             => None
        }
    }

    /// Numbers of a scalar or list value. `None` if any element is not
    /// numeric.
    pub fn as_floats(&self) -> Option<Vec<Float>> {
        match self {
            Value::List(l) => l.iter().map(|v| v.as_float()).collect(),
            v              => v.as_float().map(|f| vec![f])
        }
    }

    pub fn as_ints(&self) -> Option<Vec<i64>> {
        match self {
            Value::List(l) => l.iter().map(|v| v.as_int()).collect(),
            v              => v.as_int().map(|i| vec![i])
        }
    }

    pub fn as_strings(&self) -> Option<Vec<String>> {
        match self {
            Value::List(l) => l.iter().map(|v| v.as_str().map(|s| s.to_owned())).collect(),
            v              => v.as_str().map(|s| vec![s.to_owned()])
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Value::List(l) => l.len(),
            _              => 1
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Value::Str(s)   => write!(f, "\"{}\"", s),
            Value::Int(i)   => write!(f, "{}", i),
            Value::Float(v) => write!(f, "{}", v),
            Value::List(l)  => {
                write!(f, "[")?;
                for v in l.iter() {
                    write!(f, " {}", v)?;
                }
                write!(f, " ]")
            }
        }
    }
}

/// One parsed directive of a scene file.
#[derive(Debug, Clone)]
pub struct Operation {
    pub file    : PathBuf,
    pub line    : usize,
    pub action  : String,
    pub operand : Option<Value>,
    pub params  : ParamSet
}

impl Operation {
    pub fn has_operand(&self) -> bool {
        self.operand.is_some()
    }
}

impl Display for Operation {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.action)?;

        if let Some(ref o) = self.operand {
            write!(f, " {}", o)?;
        }

        write!(f, "{}", self.params)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Identity,
    Translate,
    Rotate,
    Scale,
    LookAt,
    Transform,
    ConcatTransform,
    CoordinateSystem,
    CoordSysTransform,
    Camera,
    Film,
    Sampler,
    Integrator,
    WorldBegin,
    WorldEnd,
    AttributeBegin,
    AttributeEnd,
    TransformBegin,
    TransformEnd,
    ObjectBegin,
    ObjectEnd,
    ObjectInstance,
    Material,
    MakeNamedMaterial,
    NamedMaterial,
    Texture,
    LightSource,
    AreaLightSource,
    Shape,
    ReverseOrientation,
    Include,
    /// Understood but not translated, e.g. participating media.
    Unsupported(String),
    /// Render settings without a counterpart in the output.
    Ignored(String),
    Unknown(String)
}

impl From<&str> for Action {
    fn from(s: &str) -> Self {
        match s {
            "Identity"           => Action::Identity,
            "Translate"          => Action::Translate,
            "Rotate"             => Action::Rotate,
            "Scale"              => Action::Scale,
            "LookAt"             => Action::LookAt,
            "Transform"          => Action::Transform,
            "ConcatTransform"    => Action::ConcatTransform,
            "CoordinateSystem"   => Action::CoordinateSystem,
            "CoordSysTransform"  => Action::CoordSysTransform,
            "Camera"             => Action::Camera,
            "Film"               => Action::Film,
            "Sampler"            => Action::Sampler,
            "Integrator"         => Action::Integrator,
            "WorldBegin"         => Action::WorldBegin,
            "WorldEnd"           => Action::WorldEnd,
            "AttributeBegin"     => Action::AttributeBegin,
            "AttributeEnd"       => Action::AttributeEnd,
            "TransformBegin"     => Action::TransformBegin,
            "TransformEnd"       => Action::TransformEnd,
            "ObjectBegin"        => Action::ObjectBegin,
            "ObjectEnd"          => Action::ObjectEnd,
            "ObjectInstance"     => Action::ObjectInstance,
            "Material"           => Action::Material,
            "MakeNamedMaterial"  => Action::MakeNamedMaterial,
            "NamedMaterial"      => Action::NamedMaterial,
            "Texture"            => Action::Texture,
            "LightSource"        => Action::LightSource,
            "AreaLightSource"    => Action::AreaLightSource,
            "Shape"              => Action::Shape,
            "ReverseOrientation" => Action::ReverseOrientation,
            "Include" | "Import" => Action::Include,
            "MakeNamedMedium"    |
            "MediumInterface"    => Action::Unsupported(s.to_owned()),
            "PixelFilter"        |
            "Accelerator"        |
            "TransformTimes"     |
            "ActiveTransform"    |
            "ColorSpace"         |
            "Option"             => Action::Ignored(s.to_owned()),
            _                    => Action::Unknown(s.to_owned())
        }
    }
}
