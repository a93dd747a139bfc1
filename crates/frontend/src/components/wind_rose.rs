//! Wind-exposure rose: eight pie slices driven by an eight-bit string.

use yew::prelude::*;

const SECTORS: usize = 8;

/// SVG path for one 45-degree sector, sectors counted clockwise from north.
pub fn sector_path(index: usize, radius: f64) -> String {
    let start = (index as f64 * 360.0 / SECTORS as f64 - 90.0).to_radians();
    let end = ((index + 1) as f64 * 360.0 / SECTORS as f64 - 90.0).to_radians();

    let x1 = radius + radius * start.cos();
    let y1 = radius + radius * start.sin();
    let x2 = radius + radius * end.cos();
    let y2 = radius + radius * end.sin();

    // Sectors are 45 degrees, so the large-arc flag is never set.
    format!(
        "M {radius},{radius} L {x1:.2},{y1:.2} A {radius},{radius} 0 0 1 {x2:.2},{y2:.2} Z"
    )
}

#[derive(Properties, Clone, PartialEq)]
pub struct WindRoseProps {
    /// One character per compass sector starting at north; '1' marks an
    /// exposed sector.
    pub bit_string: String,
    #[prop_or(50)]
    pub size: u32,
    #[prop_or("#ff0000".to_string())]
    pub filled_color: String,
    #[prop_or("#cccccc".to_string())]
    pub empty_color: String,
}

#[function_component(WindRose)]
pub fn wind_rose(props: &WindRoseProps) -> Html {
    let radius = props.size as f64 / 2.0;
    let bits: Vec<char> = props.bit_string.chars().collect();

    let slices = (0..SECTORS).map(|i| {
        let fill = if bits.get(i) == Some(&'1') {
            props.filled_color.clone()
        } else {
            props.empty_color.clone()
        };
        html! {
            <path d={sector_path(i, radius)} fill={fill} stroke="#000" stroke-width="1" />
        }
    });

    html! {
        <svg width={props.size.to_string()} height={props.size.to_string()}>
            { for slices }
        </svg>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_sector_starts_at_north() {
        assert_eq!(
            sector_path(0, 40.0),
            "M 40,40 L 40.00,0.00 A 40,40 0 0 1 68.28,11.72 Z"
        );
    }

    #[test]
    fn no_sector_sets_the_large_arc_flag() {
        for i in 0..8 {
            let path = sector_path(i, 25.0);
            assert!(path.contains("A 25,25 0 0 1"), "{path}");
        }
    }
}
