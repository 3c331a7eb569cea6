use sorted_pqueue::{EmptyQueueError, SortedPriorityQueue};

fn main() -> Result<(), EmptyQueueError> {
    let mut pq = SortedPriorityQueue::new();
    pq.add(5, "A");
    pq.add(9, "C");
    pq.add(3, "B");
    pq.add(7, "D");

    println!("Min: {:?}", pq.min()?);
    println!("Remove Min: {:?}", pq.remove_min()?);
    println!("Min: {:?}", pq.min()?);

    Ok(())
}
