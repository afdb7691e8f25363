use criterion::{Criterion, black_box, criterion_group, criterion_main};
use mazegrid::{Generator, Maze};

const SIZE: u8 = 50;

pub fn generators(c: &mut Criterion) {
    for generator in Generator::ALL {
        c.bench_function(generator.name(), |b| {
            b.iter(|| {
                let mut maze = Maze::new(black_box(SIZE), black_box(SIZE), (0, 0), None).unwrap();
                maze.generate(generator, false, Some(0));
                maze
            })
        });
    }
}

criterion_group! {name = benches; config = Criterion::default().sample_size(10); targets = generators}
criterion_main!(benches);
