use svg::Document;
use svg::node::element::{Group, Rectangle, Text, Title};

use tessella::entities::StyledShape;
use tessella::generators::Pattern;
use tessella::geometry::ShapeType;
use tessella::params::CanvasParams;

use crate::io::svg_util;
use crate::io::svg_util::SvgDrawOptions;

/// Draws every shape of the pattern in draw order on top of the canvas.
pub fn pattern_to_svg(
    pattern: &Pattern,
    canvas: &CanvasParams,
    options: SvgDrawOptions,
    title: &str,
) -> Document {
    let (width, height) = (canvas.width as f64, canvas.height as f64);

    let mut document = Document::new()
        .set("viewBox", (0.0, 0.0, width, height))
        .set("width", width)
        .set("height", height)
        .add(Title::new(title));

    if options.background {
        document = document.add(
            Rectangle::new()
                .set("x", 0.0)
                .set("y", 0.0)
                .set("width", width)
                .set("height", height)
                .set("fill", canvas.background.as_str()),
        );
    }

    let shapes_group = pattern
        .draw_order()
        .fold(Group::new().set("id", "pattern"), |group, s| {
            add_shape(group, s, options, false)
        });
    document = document.add(shapes_group);

    if let (Pattern::Packing(report), true) = (pattern, options.boundary_on_top) {
        let outline = add_shape(
            Group::new().set("id", "boundary"),
            &report.boundary,
            options,
            true,
        );
        document = document.add(outline);
    }

    if options.label {
        let font_size = f64::min(width, height) * 0.025;
        let label = Text::new(format!("{} | {} shapes", title, pattern.len()))
            .set("x", font_size)
            .set("y", 1.5 * font_size)
            .set("font-size", font_size)
            .set("font-family", "monospace")
            .set("font-weight", "500");
        document = document.add(label);
    }

    document
}

fn add_shape(group: Group, styled: &StyledShape, options: SvgDrawOptions, outline: bool) -> Group {
    let StyledShape { shape, style } = styled;
    let stroke_width = style.line_width * options.stroke_width_multiplier;
    let stroke_width_str = format!("{stroke_width}");
    let dash_array = svg_util::dash_array(&style.line_type, stroke_width);

    let mut params = vec![
        (
            "fill",
            match outline {
                true => "none",
                false => style.fill_colour.as_str(),
            },
        ),
        ("stroke", style.line_colour.as_str()),
        ("stroke-width", stroke_width_str.as_str()),
    ];
    if let Some(dash_array) = dash_array.as_deref() {
        params.push(("stroke-dasharray", dash_array));
    }

    match shape.shape_type() {
        ShapeType::Circle => group.add(svg_util::circle(shape.center(), shape.radius(), &params)),
        ShapeType::Square | ShapeType::Triangle | ShapeType::Hexagon => group.add(
            svg_util::data_to_path(svg_util::polygon_data(&shape.vertices()), &params),
        ),
    }
}
