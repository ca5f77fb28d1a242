use log::info;
use prioq::{BinaryHeap, Error, Options};

#[derive(Debug)]
struct Task {
    name: &'static str,
    priority: i32,
}

fn main() -> Result<(), Error> {
    env_logger::init();

    let mut pq = BinaryHeap::<Task, _>::from_options(Options {
        compare: Some(|a: &Task, b: &Task| a.priority.cmp(&b.priority)),
        capacity: 3,
    })?;

    pq.insert(Task { name: "task1", priority: 3 });
    pq.insert(Task { name: "task2", priority: 1 });
    pq.insert(Task { name: "task3", priority: 2 });
    info!("{:?}", pq);

    println!("{:?}", pq.extract_top());
    println!("{:?}", pq.peek());
    println!("{}", pq.size());

    while let Some(task) = pq.extract_top() {
        println!("{} ({})", task.name, task.priority);
    }
    Ok(())
}
