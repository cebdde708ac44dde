//! Color mapping for seed payloads

use crate::seed::Rgba;

/// Trait for mapping a seed payload to a region color
pub trait ColorMapper<T> {
    /// Map a payload to an RGBA color
    fn map_color(&self, payload: &T) -> Rgba;
}

/// Uses the payload itself as the color, for seeds carrying `Rgba`
#[derive(Debug, Clone, Copy, Default)]
pub struct PayloadColorMapper;

impl ColorMapper<Rgba> for PayloadColorMapper {
    fn map_color(&self, payload: &Rgba) -> Rgba {
        *payload
    }
}

/// Same color for every region
#[derive(Debug, Clone, Copy)]
pub struct UniformColorMapper(pub Rgba);

impl Default for UniformColorMapper {
    fn default() -> Self {
        Self([1.0, 1.0, 1.0, 1.0])
    }
}

impl<T> ColorMapper<T> for UniformColorMapper {
    fn map_color(&self, _payload: &T) -> Rgba {
        self.0
    }
}

/// Wraps a closure, for payloads such as labels or entity handles
#[derive(Debug, Clone, Copy)]
pub struct FnColorMapper<F>(pub F);

impl<T, F> ColorMapper<T> for FnColorMapper<F>
where
    F: Fn(&T) -> Rgba,
{
    fn map_color(&self, payload: &T) -> Rgba {
        (self.0)(payload)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payload_color_mapper() {
        let red: Rgba = [1.0, 0.0, 0.0, 1.0];
        assert_eq!(PayloadColorMapper.map_color(&red), red);
    }

    #[test]
    fn test_uniform_color_mapper() {
        let mapper = UniformColorMapper([0.2, 0.4, 0.6, 1.0]);
        assert_eq!(mapper.map_color(&"anything"), [0.2, 0.4, 0.6, 1.0]);
        assert_eq!(UniformColorMapper::default().map_color(&7u8)[3], 1.0);
    }

    #[test]
    fn test_fn_color_mapper() {
        let mapper = FnColorMapper(|label: &&str| match *label {
            "red" => [1.0, 0.0, 0.0, 1.0],
            _ => [0.5, 0.5, 0.5, 1.0],
        });
        assert_eq!(mapper.map_color(&"red"), [1.0, 0.0, 0.0, 1.0]);
        assert_eq!(mapper.map_color(&"cyan"), [0.5, 0.5, 0.5, 1.0]);
    }
}
