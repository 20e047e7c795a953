// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Marquee basics.
//!
//! Drive a marquee over a tiny layer stack and report which items the final
//! rectangle encloses. Everything is headless; the "scene" is a list of
//! layers shared with the overlay handle.
//!
//! Run:
//! - `cargo run -p understory_examples --example marquee_basics`

use std::cell::RefCell;
use std::rc::Rc;

use kurbo::{Point, Rect};
use peniko::Color;
use understory_marquee::{
    DragEvent, MarqueeController, MarqueeOverlay, MarqueeResponse, MarqueeStyle, OverlayContainer,
};

#[derive(Debug)]
enum Layer {
    Item { name: &'static str, rect: Rect },
    Marquee { rect: Rect, fill: Color, border: Color },
}

/// Layers in paint order, bottom first.
#[derive(Default)]
struct Scene {
    layers: Rc<RefCell<Vec<Layer>>>,
}

/// Handle to the marquee layer inside a [`Scene`].
struct SceneOverlay {
    layers: Rc<RefCell<Vec<Layer>>>,
}

impl SceneOverlay {
    fn with_layer(&self, f: impl FnOnce(&mut Rect, &mut Color, &mut Color)) {
        let mut layers = self.layers.borrow_mut();
        if let Some(Layer::Marquee { rect, fill, border }) = layers
            .iter_mut()
            .find(|layer| matches!(layer, Layer::Marquee { .. }))
        {
            f(rect, fill, border);
        }
    }
}

impl OverlayContainer for Scene {
    type Overlay = SceneOverlay;

    fn insert_overlay(&mut self, stack_order: usize) -> SceneOverlay {
        let mut layers = self.layers.borrow_mut();
        let index = stack_order.min(layers.len());
        layers.insert(
            index,
            Layer::Marquee {
                rect: Rect::ZERO,
                fill: Color::TRANSPARENT,
                border: Color::TRANSPARENT,
            },
        );
        SceneOverlay {
            layers: Rc::clone(&self.layers),
        }
    }
}

impl MarqueeOverlay for SceneOverlay {
    fn apply_style(&mut self, style: &MarqueeStyle) {
        self.with_layer(|_, fill, border| {
            *fill = style.fill_color();
            *border = style.border_color();
        });
    }

    fn set_bounds(&mut self, bounds: Rect) {
        self.with_layer(|rect, _, _| *rect = bounds);
    }

    fn detach(self) {
        self.layers
            .borrow_mut()
            .retain(|layer| !matches!(layer, Layer::Marquee { .. }));
    }
}

fn main() {
    let mut scene = Scene::default();
    scene.layers.borrow_mut().extend([
        Layer::Item {
            name: "a",
            rect: Rect::new(20.0, 20.0, 60.0, 60.0),
        },
        Layer::Item {
            name: "b",
            rect: Rect::new(100.0, 40.0, 140.0, 80.0),
        },
        Layer::Item {
            name: "c",
            rect: Rect::new(200.0, 200.0, 240.0, 240.0),
        },
    ]);

    // Place the marquee above the three items.
    let style = MarqueeStyle::default()
        .with_tint(Color::from_rgba8(52, 119, 154, 255))
        .with_stack_order(3);
    let mut marquee = MarqueeController::new(style);

    marquee.handle(&mut DragEvent::start(Point::new(160.0, 100.0), &mut scene));
    for p in [
        Point::new(120.0, 70.0),
        Point::new(60.0, 40.0),
        Point::new(10.0, 10.0),
    ] {
        if let MarqueeResponse::Changed(rect) = marquee.handle(&mut DragEvent::<Scene>::moved(p))
        {
            println!("drag to {p:?}: selection {rect:?}");
        }
    }
    println!("layers mid-drag: {:#?}", scene.layers.borrow());

    let MarqueeResponse::Ended(selection) =
        marquee.handle(&mut DragEvent::<Scene>::end(Point::new(10.0, 10.0)))
    else {
        println!("no selection");
        return;
    };
    let enclosed: Vec<&str> = scene
        .layers
        .borrow()
        .iter()
        .filter_map(|layer| match layer {
            Layer::Item { name, rect } if selection.union(*rect) == selection => Some(*name),
            _ => None,
        })
        .collect();
    println!("final selection {selection:?} encloses {enclosed:?}");
    println!("layers after drag: {}", scene.layers.borrow().len());
}
