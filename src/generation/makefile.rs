//! The Makefile document for scaffolded Go projects

use crate::generation::{Document, Gate, OptionName, OptionSet, Piece, Segment};

pub const FILE_NAME: &str = "Makefile";

const BENCH_FLAGS: Piece = Piece::Token {
    gate: Gate::On(OptionName::Bench),
    text: " -bench=. -benchmem",
};

/// Baseline head, optional targets in fixed order after it
pub static MAKEFILE: Document = Document::new(&[
    Segment::Literal(
        "\n.DEFAULT_GOAL := build\n\
         \n\
         fmt:\n\
         \t@go fmt ./...\n\
         .PHONY:fmt\n\
         \n\
         lint: fmt\n\
         \t@golint ./...\n\
         .PHONY:lint\n\
         \n\
         vet: fmt\n\
         \t@go vet ./...\n",
    ),
    Segment::Conditional {
        gate: Gate::On(OptionName::Shadow),
        body: &[Piece::Text("\t@shadow ./...\n")],
    },
    Segment::Literal(".PHONY:vet\n"),
    // executable head
    Segment::Conditional {
        gate: Gate::Off(OptionName::Library),
        body: &[Piece::Text(
            "\nbuild: vet\n\
             \t@go build\n\
             .PHONY:build\n\
             \n\
             run: vet\n\
             \t@go run main.go\n\
             .PHONY:run\n",
        )],
    },
    // package head, no run target
    Segment::Conditional {
        gate: Gate::On(OptionName::Library),
        body: &[Piece::Text(
            "\nbuild: vet\n\
             \t@go build ./...\n\
             .PHONY:build\n",
        )],
    },
    Segment::Conditional {
        gate: Gate::On(OptionName::Test),
        body: &[
            Piece::Text("\ntest: vet\n\t@go test"),
            BENCH_FLAGS,
            Piece::Token {
                gate: Gate::On(OptionName::Cover),
                text: " -cover",
            },
            Piece::Text(" ./...\n.PHONY:test\n"),
        ],
    },
    Segment::Conditional {
        gate: Gate::On(OptionName::Bench),
        body: &[Piece::Text(
            "\nbench: vet\n\
             \t@go test -run=^$$ -bench=. -benchmem ./...\n\
             .PHONY:bench\n",
        )],
    },
    Segment::Conditional {
        gate: Gate::On(OptionName::Cover),
        body: &[Piece::Text(
            "\ncover: vet\n\
             \t@go test -cover ./...\n\
             .PHONY:cover\n",
        )],
    },
    Segment::Conditional {
        gate: Gate::Both(OptionName::Bench, OptionName::Cover),
        body: &[Piece::Text(
            "\nbench-cover: vet\n\
             \t@go test -bench=. -benchmem -cover ./...\n\
             .PHONY:bench-cover\n",
        )],
    },
    Segment::Conditional {
        gate: Gate::On(OptionName::CoverHtml),
        body: &[Piece::Text(
            "\ncover-html: vet\n\
             \t@go test -coverprofile=c.out ./...\n\
             \t@go tool cover -html=c.out\n\
             .PHONY:cover-html\n",
        )],
    },
    Segment::Conditional {
        gate: Gate::On(OptionName::TestRace),
        body: &[Piece::Text(
            "\ntest-race: vet\n\
             \t@go test -race ./...\n\
             .PHONY:test-race\n",
        )],
    },
    Segment::Conditional {
        gate: Gate::On(OptionName::Race),
        body: &[
            Piece::Text("\nbuild-race: vet\n\t@go build -race"),
            Piece::Token {
                gate: Gate::On(OptionName::Library),
                text: " ./...",
            },
            Piece::Text("\n.PHONY:build-race\n"),
        ],
    },
    Segment::Conditional {
        gate: Gate::On(OptionName::CpuProfile),
        body: &[
            Piece::Text("\ntest-cpu: vet\n\t@go test"),
            BENCH_FLAGS,
            Piece::Text(
                " -cpuprofile cpu.out ./...\n\
                 \t@go tool pprof cpu.out\n\
                 .PHONY:test-cpu\n",
            ),
        ],
    },
    Segment::Conditional {
        gate: Gate::On(OptionName::MemProfile),
        body: &[
            Piece::Text("\ntest-mem: vet\n\t@go test"),
            BENCH_FLAGS,
            Piece::Text(
                " -memprofile mem.out ./...\n\
                 \t@go tool pprof mem.out\n\
                 .PHONY:test-mem\n",
            ),
        ],
    },
]);

pub fn render(options: &OptionSet) -> String {
    MAKEFILE.render(options)
}
