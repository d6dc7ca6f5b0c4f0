use crate::grid::Grid;

/// Which boundary rule a field obeys.
///
/// Scalars copy the adjacent interior value onto the edge; a velocity
/// component is negated on the two edges perpendicular to it so flow
/// reflects off the walls instead of leaking through them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Scalar,
    VelocityX,
    VelocityY,
}

/// Applies edge and corner conditions to `field` in place.
///
/// Each boundary row/column receives the adjacent interior row/column
/// (negated when `kind` is the perpendicular velocity component), and each
/// corner becomes the average of its two edge neighbors. Called after every
/// relaxation sweep and after every pass that writes a field read later.
pub fn enforce(field: &mut Grid, kind: FieldKind) {
    let w = field.width();
    let h = field.height();

    for x in 1..w - 1 {
        let top = field.get(x, 1);
        let bottom = field.get(x, h - 2);
        if kind == FieldKind::VelocityY {
            field.set(x, 0, -top);
            field.set(x, h - 1, -bottom);
        } else {
            field.set(x, 0, top);
            field.set(x, h - 1, bottom);
        }
    }

    for y in 1..h - 1 {
        let left = field.get(1, y);
        let right = field.get(w - 2, y);
        if kind == FieldKind::VelocityX {
            field.set(0, y, -left);
            field.set(w - 1, y, -right);
        } else {
            field.set(0, y, left);
            field.set(w - 1, y, right);
        }
    }

    field.set(0, 0, 0.5 * (field.get(1, 0) + field.get(0, 1)));
    field.set(0, h - 1, 0.5 * (field.get(1, h - 1) + field.get(0, h - 2)));
    field.set(w - 1, 0, 0.5 * (field.get(w - 2, 0) + field.get(w - 1, 1)));
    field.set(
        w - 1,
        h - 1,
        0.5 * (field.get(w - 2, h - 1) + field.get(w - 1, h - 2)),
    );
}
