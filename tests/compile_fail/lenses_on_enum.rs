use focal::Lenses;

#[derive(Lenses)]
enum Shape {
    Circle(f64),
}

fn main() {
    let Shape::Circle(radius) = Shape::Circle(1.0);
    let _ = radius;
}
