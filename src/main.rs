use log::info;

use symbdd::core::bdd_manager::DDManager;

fn main() {
    env_logger::init();

    let mut man = DDManager::default();

    let a = man.create_var("A");
    let b = man.create_var("B");
    let c = man.create_var("C");
    let d = man.create_var("D");

    let a_or_b = man.or(a, b);
    let c_and_d = man.and(c, d);
    let f = man.and(a_or_b, c_and_d);

    info!("{:?}", man);
    info!("f = (A + B) * (C * D) rooted at node {}", f.0);

    print!("{}", man.dump_text(f));

    std::fs::write("bdd.dot", man.graphviz(f)).expect("unable to write bdd.dot");
}
