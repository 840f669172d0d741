use crate::module::ModuleRef;

/// Samples a module across the surface of a unit-radius, infinite-height
/// cylinder aligned to the y axis.
pub struct CylinderModel {
    module: ModuleRef,
}

impl CylinderModel {
    pub fn new(module: ModuleRef) -> Self {
        CylinderModel { module }
    }

    pub fn set_module(&mut self, module: ModuleRef) {
        self.module = module;
    }

    pub fn value(&self, angle_deg: f64, height: f64) -> f64 {
        let angle = angle_deg.to_radians();
        self.module.value(angle.cos(), height, angle.sin())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::module::generators::Const;
    use std::rc::Rc;

    #[test]
    fn samples_on_the_unit_circle() {
        let c = CylinderModel::new(Rc::new(Const::new(0.5)));
        assert_eq!(c.value(90.0, 3.0), 0.5);
    }
}
