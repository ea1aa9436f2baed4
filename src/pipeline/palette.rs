// src/pipeline/palette.rs

use crate::models::ColorScheme;

// Opacidade decrescente: a primeira fatia/barra é a mais forte
const OPACITIES: [f64; 6] = [1.0, 0.85, 0.7, 0.55, 0.4, 0.25];

pub struct Palette {
    pub primary: &'static str,
    pub secondary: &'static str,
    pub rgb: (u8, u8, u8),
}

impl Palette {
    pub fn scheme(&self) -> ColorScheme {
        let (r, g, b) = self.rgb;
        ColorScheme {
            primary: self.primary.to_string(),
            secondary: self.secondary.to_string(),
            palette: OPACITIES
                .iter()
                .map(|alpha| format!("rgba({r}, {g}, {b}, {alpha})"))
                .collect(),
        }
    }
}

pub const ORDERS: Palette = Palette {
    primary: "#3b82f6",
    secondary: "#93c5fd",
    rgb: (59, 130, 246),
};

pub const PRODUCTS: Palette = Palette {
    primary: "#10b981",
    secondary: "#6ee7b7",
    rgb: (16, 185, 129),
};

pub const PERFORMANCE: Palette = Palette {
    primary: "#8b5cf6",
    secondary: "#c4b5fd",
    rgb: (139, 92, 246),
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_has_six_fading_colors() {
        let scheme = PRODUCTS.scheme();
        assert_eq!(scheme.primary, "#10b981");
        assert_eq!(scheme.palette.len(), 6);
        assert_eq!(scheme.palette[0], "rgba(16, 185, 129, 1)");
        assert_eq!(scheme.palette[5], "rgba(16, 185, 129, 0.25)");
    }
}
