use criterion::{black_box, criterion_group, criterion_main, Criterion};

use tile_solver::{parse_board, solve, Board};

const SIMPLE_INPUT: &str = "
4 1 3
_ 2 6
7 5 8";

const MEDIUM_INPUT: &str = "
8 1 3
4 _ 2
7 6 5";

// one of the two 8-puzzle positions furthest from the goal (31 moves)
const HARDER_INPUT: &str = "
8 6 7
2 5 4
3 _ 1";

const FIFTEEN_INPUT: &str = "
 5  1  2  4
 9  6  3  8
13 10  7 11
14 15 12  _";

fn criterion_bench(c: &mut Criterion) {
    for (name, input) in [
        ("simple", SIMPLE_INPUT),
        ("medium", MEDIUM_INPUT),
        ("harder", HARDER_INPUT),
        ("fifteen", FIFTEEN_INPUT),
    ] {
        c.bench_function(name, |b| {
            let input = parse_board(input).unwrap();
            let target = Board::goal(input.size()).unwrap();
            b.iter(|| {
                solve(black_box(&input), black_box(&target)).unwrap();
            })
        });
    }
}

criterion_group!(benches, criterion_bench);
criterion_main!(benches);
