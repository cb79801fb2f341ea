use set_algebra::{Set, diff, equal, inter, print, prod, set, sym_diff, union};

fn main() {
    println!("\n[Set]\n");

    let mut a = set![1, 2, 2, 3];
    print(&a);
    println!("card: {}", a.len());

    a.insert(4);
    a.remove(&1);
    print(&a);

    println!("get_one: {:?}", a.get_one());
    println!("get_one (empty): {:?}", Set::<i32>::new().get_one());

    println!("\n[Algebra]\n");

    let a = set![1, 2];
    let b = set![2, 3];

    print(&union(&a, &b));
    print(&inter(&a, &b));
    print(&diff(&a, &b));
    print(&sym_diff(&a, &b));
    print(&prod(&a, &set!["x", "y"]));

    println!("equal: {}", equal(&set![1, 2, 3], &set![3, 2, 1]));
    println!("subset: {}", a.is_subset(&union(&a, &b)));
}
