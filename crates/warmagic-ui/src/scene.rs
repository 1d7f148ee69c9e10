//! Ordered widget collection for a screen.

use warmagic_engine::coords::{Point, ScreenTransform};

use crate::painter::Painter;
use crate::widget::Widget;

/// Stable handle to a widget inside a [`Scene`].
///
/// Ids are never reused within one scene, so a stale handle after removal
/// simply stops resolving instead of aliasing a newer widget.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct WidgetId(u64);

/// Owning, ordered collection of widgets.
///
/// Widgets draw in insertion order; later insertions paint on top. The
/// scene owns its widgets outright; dropping the scene drops them. There is
/// no global registry, a host can hold as many scenes as it has screens.
#[derive(Debug, Default)]
pub struct Scene {
    entries: Vec<(WidgetId, Widget)>,
    next_id: u64,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a widget at the top of the paint order.
    pub fn insert(&mut self, widget: Widget) -> WidgetId {
        let id = WidgetId(self.next_id);
        self.next_id += 1;
        self.entries.push((id, widget));
        id
    }

    /// Removes and returns a widget. `None` when the id no longer resolves.
    pub fn remove(&mut self, id: WidgetId) -> Option<Widget> {
        let Some(index) = self.entries.iter().position(|(entry_id, _)| *entry_id == id) else {
            log::debug!("remove with stale id {id:?}");
            return None;
        };
        Some(self.entries.remove(index).1)
    }

    pub fn get(&self, id: WidgetId) -> Option<&Widget> {
        self.entries
            .iter()
            .find(|(entry_id, _)| *entry_id == id)
            .map(|(_, w)| w)
    }

    pub fn get_mut(&mut self, id: WidgetId) -> Option<&mut Widget> {
        self.entries
            .iter_mut()
            .find(|(entry_id, _)| *entry_id == id)
            .map(|(_, w)| w)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Widgets in paint order.
    pub fn iter(&self) -> impl Iterator<Item = (WidgetId, &Widget)> {
        self.entries.iter().map(|(id, w)| (*id, w))
    }

    /// Draws every widget in insertion order, in its current space.
    pub fn draw(&self, painter: &mut Painter) {
        for (_, widget) in &self.entries {
            widget.draw(painter);
        }
    }

    /// Draws every widget through the design-to-screen transform.
    pub fn draw_transformed(&self, transform: &ScreenTransform, painter: &mut Painter) {
        for (_, widget) in &self.entries {
            widget.draw_transformed(transform, painter);
        }
    }

    /// Topmost widget whose rect strictly contains `p`, in the space the
    /// widgets are authored in (pass a design-space point; screen-space
    /// pointer positions map back via `ScreenTransform::unapply_point`).
    pub fn hit_test(&self, p: Point) -> Option<WidgetId> {
        self.entries
            .iter()
            .rev()
            .find(|(_, widget)| widget.rect().contains(p))
            .map(|(id, _)| *id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::align::Align;
    use crate::style::Style;
    use warmagic_engine::coords::Rect;
    use warmagic_engine::scene::{DrawCmd, DrawList};
    use warmagic_engine::text::{FontId, FontSystem};

    fn panel(left: f32, top: f32, right: f32, bottom: f32) -> Widget {
        Widget::panel(Rect::new(left, top, right, bottom), Style::WARMAGIC_BORDERLESS)
    }

    // ── collection semantics ──────────────────────────────────────────────

    #[test]
    fn insert_returns_distinct_ids() {
        let mut scene = Scene::new();
        let a = scene.insert(panel(0.0, 0.0, 10.0, 10.0));
        let b = scene.insert(panel(0.0, 0.0, 10.0, 10.0));
        assert_ne!(a, b);
        assert_eq!(scene.len(), 2);
    }

    #[test]
    fn remove_returns_the_widget_and_invalidates_the_id() {
        let mut scene = Scene::new();
        let id = scene.insert(panel(0.0, 0.0, 10.0, 10.0));
        assert!(scene.remove(id).is_some());
        assert!(scene.remove(id).is_none());
        assert!(scene.get(id).is_none());
        assert!(scene.is_empty());
    }

    #[test]
    fn ids_are_not_reused_after_removal() {
        let mut scene = Scene::new();
        let a = scene.insert(panel(0.0, 0.0, 10.0, 10.0));
        scene.remove(a);
        let b = scene.insert(panel(0.0, 0.0, 10.0, 10.0));
        assert_ne!(a, b);
    }

    #[test]
    fn get_mut_allows_in_place_edits() {
        let mut scene = Scene::new();
        let id = scene.insert(Widget::toggle_button(
            Rect::new(0.0, 0.0, 40.0, 20.0),
            "snd",
            10.0,
            Align::CENTER,
            Style::WARMAGIC,
            false,
        ));
        if let Some(Widget::ToggleButton(t)) = scene.get_mut(id) {
            t.toggled = true;
        }
        match scene.get(id) {
            Some(Widget::ToggleButton(t)) => assert!(t.toggled),
            other => panic!("unexpected widget: {other:?}"),
        }
    }

    // ── draw order ────────────────────────────────────────────────────────

    #[test]
    fn draws_in_insertion_order() {
        let mut scene = Scene::new();
        scene.insert(panel(0.0, 0.0, 10.0, 10.0));
        scene.insert(panel(20.0, 0.0, 30.0, 10.0));

        let fonts = FontSystem::new();
        let mut list = DrawList::new();
        scene.draw(&mut Painter::new(&mut list, &fonts, FontId::FALLBACK));

        let lefts: Vec<f32> = list
            .items()
            .iter()
            .map(|c| match c {
                DrawCmd::Rect(r) => r.rect.left,
                other => panic!("unexpected cmd: {other:?}"),
            })
            .collect();
        assert_eq!(lefts, [0.0, 20.0]);
    }

    #[test]
    fn removal_keeps_relative_order_of_the_rest() {
        let mut scene = Scene::new();
        let _a = scene.insert(panel(0.0, 0.0, 10.0, 10.0));
        let b = scene.insert(panel(20.0, 0.0, 30.0, 10.0));
        let _c = scene.insert(panel(40.0, 0.0, 50.0, 10.0));
        scene.remove(b);

        let order: Vec<f32> = scene.iter().map(|(_, w)| w.rect().left).collect();
        assert_eq!(order, [0.0, 40.0]);
    }

    #[test]
    fn draw_transformed_projects_every_widget() {
        let mut scene = Scene::new();
        scene.insert(panel(0.0, 0.0, 800.0, 600.0));
        let transform = ScreenTransform::fit(1600.0, 1200.0, 800.0, 600.0);

        let fonts = FontSystem::new();
        let mut list = DrawList::new();
        scene.draw_transformed(&transform, &mut Painter::new(&mut list, &fonts, FontId::FALLBACK));

        match &list.items()[..] {
            [DrawCmd::Rect(r)] => assert_eq!(r.rect, Rect::new(0.0, 0.0, 1600.0, 1200.0)),
            other => panic!("unexpected cmds: {other:?}"),
        }
    }

    // ── hit testing ───────────────────────────────────────────────────────

    #[test]
    fn hit_test_prefers_the_topmost_widget() {
        let mut scene = Scene::new();
        let below = scene.insert(panel(0.0, 0.0, 100.0, 100.0));
        let above = scene.insert(panel(25.0, 25.0, 75.0, 75.0));

        assert_eq!(scene.hit_test(Point::new(50.0, 50.0)), Some(above));
        assert_eq!(scene.hit_test(Point::new(10.0, 10.0)), Some(below));
        assert_eq!(scene.hit_test(Point::new(200.0, 200.0)), None);
    }

    #[test]
    fn hit_test_excludes_edges() {
        let mut scene = Scene::new();
        scene.insert(panel(0.0, 0.0, 100.0, 100.0));
        assert_eq!(scene.hit_test(Point::new(0.0, 0.0)), None);
        assert_eq!(scene.hit_test(Point::new(100.0, 50.0)), None);
    }
}
