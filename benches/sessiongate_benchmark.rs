use criterion::{criterion_group, criterion_main, Criterion};

use sessiongate::core::{verifier::Predicate, Builder};

pub fn login_logout(c: &mut Criterion) {
    const NUM_CYCLE: usize = 100;

    let rt = rt();
    let store = Builder::new()
        .verifier(Predicate::new(|id: &str, secret: &str| {
            id == "user@example.com" && secret == "password123"
        }))
        .build();

    c.bench_function("login_logout", |b| {
        b.iter(|| {
            rt.block_on(async {
                for _ in 0..NUM_CYCLE {
                    store.login("user@example.com", "password123").await.unwrap();
                    store.logout();
                }
            });
        });
    });
}

pub fn rejected_login(c: &mut Criterion) {
    let rt = rt();
    let store = Builder::new()
        .verifier(Predicate::new(|_: &str, _: &str| false))
        .build();

    c.bench_function("rejected_login", |b| {
        b.iter(|| {
            rt.block_on(async {
                assert!(store.login("user@example.com", "wrong").await.is_err());
            });
        });
    });
}

fn rt() -> tokio::runtime::Runtime {
    tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()
        .unwrap()
}

criterion_group!(benches, login_logout, rejected_login);
criterion_main!(benches);
