/// A closed polygon boundary, vertices as `[x, y]` pairs in whichever
/// coordinate space the caller works in (decimal degrees or meters).
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Region {
    vertices: Vec<[f64; 2]>,
}

impl Region {
    pub fn new(vertices: Vec<[f64; 2]>) -> Region {
        Self { vertices }
    }

    pub fn vertices(&self) -> &[[f64; 2]] {
        &self.vertices
    }

    /// Even-odd ray casting: counts boundary crossings of a horizontal ray
    /// from the point. Fewer than three vertices never contain anything.
    pub fn contains(&self, x: f64, y: f64) -> bool {
        let n = self.vertices.len();
        if n < 3 {
            return false;
        }

        let mut inside = false;
        let mut j = n - 1;
        for i in 0..n {
            let [xi, yi] = self.vertices[i];
            let [xj, yj] = self.vertices[j];

            if (yi > y) != (yj > y) && x < (xj - xi) * (y - yi) / (yj - yi) + xi {
                inside = !inside;
            }
            j = i;
        }

        inside
    }
}

/// The survey region's boundary in both coordinate spaces. Containment is
/// tested against whichever outline matches the conversion target, so the
/// converted values never need re-projecting just for the test.
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RegionSet {
    #[cfg_attr(feature = "serde", serde(rename = "UTM"))]
    pub utm: Region,
    #[cfg_attr(feature = "serde", serde(rename = "GEO"))]
    pub geo: Region,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_square() -> Region {
        Region::new(vec![[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0]])
    }

    #[test]
    fn inside_and_outside() {
        let square = unit_square();
        assert!(square.contains(0.5, 0.5));
        assert!(square.contains(0.01, 0.99));
        assert!(!square.contains(1.5, 0.5));
        assert!(!square.contains(0.5, -0.5));
        assert!(!square.contains(-0.01, 0.5));
    }

    #[test]
    fn concave_polygon() {
        // A "U" shape: the notch between the arms is outside
        let u = Region::new(vec![
            [0.0, 0.0],
            [3.0, 0.0],
            [3.0, 3.0],
            [2.0, 3.0],
            [2.0, 1.0],
            [1.0, 1.0],
            [1.0, 3.0],
            [0.0, 3.0],
        ]);

        assert!(u.contains(0.5, 2.0));
        assert!(u.contains(2.5, 2.0));
        assert!(u.contains(1.5, 0.5));
        assert!(!u.contains(1.5, 2.0));
    }

    #[test]
    fn degenerate_polygons_contain_nothing() {
        assert!(!Region::default().contains(0.0, 0.0));
        assert!(!Region::new(vec![[0.0, 0.0], [1.0, 1.0]]).contains(0.5, 0.5));
    }
}
