//! Maintenance screens. Each `aNNN_*` module is a static [`EntityScreenDef`]
//! over the generic [`common::EntityScreen`].

pub mod common;

pub mod a001_area;
pub mod a002_banco;
pub mod a003_cargo_empresa;
pub mod a004_categoria_trabajador_reintegro;
pub mod a005_centro_costo;
pub mod a006_contrato_laboral;
pub mod a007_cuenta_contable;
pub mod a008_dias_utiles_mes;
pub mod a009_entidad_eps;

pub use common::EntityScreenDef;

/// All registered screens
pub static SCREENS: [&EntityScreenDef; 9] = [
    &a001_area::SCREEN,
    &a002_banco::SCREEN,
    &a003_cargo_empresa::SCREEN,
    &a004_categoria_trabajador_reintegro::SCREEN,
    &a005_centro_costo::SCREEN,
    &a006_contrato_laboral::SCREEN,
    &a007_cuenta_contable::SCREEN,
    &a008_dias_utiles_mes::SCREEN,
    &a009_entidad_eps::SCREEN,
];

pub fn find_screen(key: &str) -> Option<&'static EntityScreenDef> {
    SCREENS.iter().copied().find(|s| s.key == key)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_screen_keys_are_unique() {
        let keys: HashSet<&str> = SCREENS.iter().map(|s| s.key).collect();
        assert_eq!(keys.len(), SCREENS.len());
    }

    #[test]
    fn test_find_screen() {
        assert_eq!(find_screen("banco").map(|s| s.title), Some("Banco"));
        assert!(find_screen("empresa").is_none());
    }
}
