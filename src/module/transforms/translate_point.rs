use crate::module::{Module, ModuleRef};

/// Translates the sample point before evaluating the source module.
#[derive(Clone)]
pub struct TranslatePoint {
    source: ModuleRef,
    tx: f64,
    ty: f64,
    tz: f64,
}

impl TranslatePoint {
    pub fn new(source: ModuleRef, tx: f64, ty: f64, tz: f64) -> Self {
        TranslatePoint { source, tx, ty, tz }
    }

    pub fn translation(&self) -> (f64, f64, f64) {
        (self.tx, self.ty, self.tz)
    }

    pub fn set_translation(&mut self, tx: f64, ty: f64, tz: f64) {
        self.tx = tx;
        self.ty = ty;
        self.tz = tz;
    }
}

impl Module for TranslatePoint {
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
        self.source.value(x + self.tx, y + self.ty, z + self.tz)
    }
}
