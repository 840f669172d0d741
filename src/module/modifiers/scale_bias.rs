use crate::module::{Module, ModuleRef};

/// Applies `v * scale + bias` to the source module's output.
#[derive(Clone)]
pub struct ScaleBias {
    source: ModuleRef,
    scale: f64,
    bias: f64,
}

impl ScaleBias {
    pub fn new(source: ModuleRef, scale: f64, bias: f64) -> Self {
        ScaleBias {
            source,
            scale,
            bias,
        }
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    pub fn set_scale(&mut self, scale: f64) {
        self.scale = scale;
    }

    pub fn bias(&self) -> f64 {
        self.bias
    }

    pub fn set_bias(&mut self, bias: f64) {
        self.bias = bias;
    }
}

impl Module for ScaleBias {
    fn source_count(&self) -> usize {
        1
    }

    fn get_source(&self, index: usize) -> &ModuleRef {
        match index {
            0 => &self.source,
            _ => panic!("no source module"),
        }
    }

    fn set_source(&mut self, index: usize, module: ModuleRef) {
        match index {
            0 => self.source = module,
            _ => panic!("no source module"),
        }
    }

    fn value(&self, x: f64, y: f64, z: f64) -> f64 {
        self.source.value(x, y, z) * self.scale + self.bias
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::module::generators::Const;
    use std::rc::Rc;

    #[test]
    fn rescales_and_biases_the_source() {
        let m = ScaleBias::new(Rc::new(Const::new(0.5)), 2.0, -1.0);
        assert_eq!(m.value(0.0, 0.0, 0.0), 0.0);
    }
}
