use criterion::{criterion_group, criterion_main, Criterion};

use cholinv::{
    linalg::cholesky::{det_inverse_in_place, determinant, Job},
    mat,
};

// well conditioned upper triangular factor, column-major
fn random_factor(n: usize) -> Vec<f64> {
    let mut data = vec![0.0; n * n];
    for j in 0..n {
        for i in 0..=j {
            data[j * n + i] = if i == j {
                1.0 + rand::random::<f64>()
            } else {
                rand::random::<f64>() / n as f64
            };
        }
    }
    data
}

pub fn cholinv(c: &mut Criterion) {
    for n in [16, 64, 128, 256, 512] {
        let factor = random_factor(n);

        c.bench_function(&format!("det-{n}"), |b| {
            b.iter(|| determinant(mat::from_column_major_slice(&factor, n, n)))
        });

        c.bench_function(&format!("inv-{n}"), |b| {
            let mut data = factor.clone();
            b.iter(|| {
                data.copy_from_slice(&factor);
                det_inverse_in_place(
                    mat::from_column_major_slice_mut(&mut data, n, n),
                    Job::INVERSE,
                )
            })
        });

        c.bench_function(&format!("det-inv-{n}"), |b| {
            let mut data = factor.clone();
            b.iter(|| {
                data.copy_from_slice(&factor);
                det_inverse_in_place(
                    mat::from_column_major_slice_mut(&mut data, n, n),
                    Job::BOTH,
                )
            })
        });
    }
}

criterion_group!(benches, cholinv);
criterion_main!(benches);
