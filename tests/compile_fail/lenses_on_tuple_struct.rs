use focal::Lenses;

#[derive(Lenses)]
struct Meters(f64);

fn main() {
    let _ = Meters(1.0).0;
}
