use bumpalo::Bump;
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use retype_ast::NodeFactory;
use retype_parser::{ParseOptions, Parser};

// A medium-size source touching most of the grammar
const SOURCE: &str = r#"
import { Map as Dictionary } from "collections";
import * as util from "./util";

interface User {
    id: number;
    name: string;
    email?: string;
    tags: string[];
    preferences: { theme: string; notifications: boolean };
}

type UserId = number;
type Lookup<T> = (id: UserId) => T | void;

const enum Role { Reader, Writer = 2, Admin }

class UserService<T extends User> {
    private users: Dictionary<UserId, T>;
    private nextId: UserId = 1;
    static instances = 0;
    [key: string]: any;

    constructor(public readonlyName: string) {
        this.users = new Dictionary<UserId, T>();
        UserService.instances++;
    }

    create(name: string, email?: string): User {
        var user = <User>{
            id: this.nextId++,
            name: name,
            email,
            tags: [],
            preferences: { theme: 'light', notifications: true }
        };
        this.users.set(user.id, user);
        return user;
    }

    get count(): number {
        return this.users.size;
    }

    *ids() {
        for (let [id] of this.users.entries()) {
            yield id;
        }
    }

    remove(id: UserId): boolean {
        if (!this.users.has(id)) return false;
        this.users.delete(id);
        return true;
    }
}

function filterUsers<T extends User>(users: T[], predicate: (user: T) => boolean): T[] {
    var result: T[] = [];
    for (var i = 0, n = users.length; i < n; i++) {
        if (predicate(users[i])) {
            result.push(users[i]);
        }
    }
    return result;
}

const total = (values: number[]) => values.reduce((a, b) => a + b, 0);
let mask = (flags >>> 2) & 0xff | ~shift << 3;

switch (mode) {
    case Role.Reader:
    case Role.Writer:
        util.log(`mode ${mode} of ${total([1, 2, 3])}`);
        break;
    default:
        throw new Error("unknown mode");
}

try {
    label: for (var key in registry) {
        if (key === "skip") continue label;
    }
} catch (e) {
    util.report(e as Error);
} finally {
    cleanup();
}

export { UserService, filterUsers as filter };
export default UserService;
"#;

fn bench_parse_program(c: &mut Criterion) {
    c.bench_function("parse_program_medium", |b| {
        b.iter(|| {
            let arena = Bump::new();
            let factory = NodeFactory::new(&arena);
            let mut parser = Parser::new(&factory, black_box(SOURCE), ParseOptions::default())
                .expect("bench source scans");
            let program = parser.parse_program().expect("bench source parses");
            black_box(program.items.len());
        });
    });
}

criterion_group!(benches, bench_parse_program);
criterion_main!(benches);
