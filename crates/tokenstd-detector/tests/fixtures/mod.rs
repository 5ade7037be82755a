//! Fixtures de bytecode para os testes de detecção.

/// Runtime bytecode do token RSS3 em mainnet
/// (0xc98D64DA73a6616c42117b582e832812e7B8D57F): um ERC20 OpenZeppelin
/// sem suporte a ERC165.
pub const RSS3_TOKEN_RUNTIME_BYTECODE: &str = concat!(
    "608060405234801561001057600080fd5b50600436106100a95760003560e01c",
    "80633950935111610071578063395093511461012957806370a082311461013c",
    "57806395d89b411461014f578063a457c2d714610157578063a9059cbb146101",
    "6a578063dd62ed3e1461017d576100a9565b806306fdde03146100ae57806309",
    "5ea7b3146100cc57806318160ddd146100ec57806323b872dd14610101578063",
    "313ce56714610114575b600080fd5b6100b6610190565b6040516100c3919061",
    "06dd565b60405180910390f35b6100df6100da3660046106a9565b610222565b",
    "6040516100c391906106d2565b6100f461023f565b6040516100c39190610911",
    "565b6100df61010f36600461066e565b610245565b61011c6102de565b604051",
    "6100c3919061091a565b6100df6101373660046106a9565b6102e3565b6100f4",
    "61014a36600461061b565b610337565b6100b6610356565b6100df6101653660",
    "046106a9565b610365565b6100df6101783660046106a9565b6103de565b6100",
    "f461018b36600461063c565b6103f2565b60606003805461019f9061094c565b",
    "80601f0160208091040260200160405190810160405280929190818152602001",
    "8280546101cb9061094c565b80156102185780601f106101ed57610100808354",
    "040283529160200191610218565b820191906000526020600020905b81548152",
    "90600101906020018083116101fb57829003601f168201915b50505050509050",
    "90565b600061023661022f61041d565b8484610421565b50600192915050565b",
    "60025490565b60006102528484846104d5565b6001600160a01b038416600090",
    "81526001602052604081208161027361041d565b6001600160a01b0316600160",
    "0160a01b03168152602001908152602001600020549050828110156102bf5760",
    "405162461bcd60e51b81526004016102b6906107fb565b60405180910390fd5b",
    "6102d3856102cb61041d565b858403610421565b506001949350505050565b60",
    "1290565b60006102366102f061041d565b8484600160006102fe61041d565b60",
    "01600160a01b0390811682526020808301939093526040918201600090812091",
    "8b16815292529020546103329190610928565b610421565b6001600160a01b03",
    "81166000908152602081905260409020545b919050565b60606004805461019f",
    "9061094c565b6000806001600061037461041d565b6001600160a01b03908116",
    "8252602080830193909352604091820160009081209188168152925290205490",
    "50828110156103c05760405162461bcd60e51b81526004016102b6906108cc56",
    "5b6103d46103cb61041d565b85858403610421565b5060019392505050565b60",
    "006102366103eb61041d565b84846104d5565b6001600160a01b039182166000",
    "90815260016020908152604080832093909416825291909152205490565b3390",
    "565b6001600160a01b0383166104475760405162461bcd60e51b815260040161",
    "02b690610888565b6001600160a01b03821661046d5760405162461bcd60e51b",
    "81526004016102b690610773565b6001600160a01b0380841660008181526001",
    "602090815260408083209487168084529490915290819020849055517f8c5be1",
    "e5ebec7d5bd14f71427d1e84f3dd0314c0f7b2291e5b200ac8c7c3b925906104",
    "c8908590610911565b60405180910390a3505050565b6001600160a01b038316",
    "6104fb5760405162461bcd60e51b81526004016102b690610843565b60016001",
    "60a01b0382166105215760405162461bcd60e51b81526004016102b690610730",
    "565b61052c8383836105ff565b6001600160a01b038316600090815260208190",
    "526040902054818110156105655760405162461bcd60e51b81526004016102b6",
    "906107b5565b6001600160a01b03808516600090815260208190526040808220",
    "85850390559185168152908120805484929061059c908490610928565b925050",
    "81905550826001600160a01b0316846001600160a01b03167fddf252ad1be2c8",
    "9b69c2b068fc378daa952ba7f163c4a11628f55a4df523b3ef846040516105e6",
    "9190610911565b60405180910390a36105f98484846105ff565b50505050565b",
    "505050565b80356001600160a01b038116811461035157600080fd5b60006020",
    "828403121561062c578081fd5b61063582610604565b9392505050565b600080",
    "6040838503121561064e578081fd5b61065783610604565b9150610665602084",
    "01610604565b90509250929050565b6000806000606084860312156106825780",
    "81fd5b61068b84610604565b925061069960208501610604565b915060408401",
    "3590509250925092565b600080604083850312156106bb578182fd5b6106c483",
    "610604565b946020939093013593505050565b901515815260200190565b6000",
    "602080835283518082850152825b818110156107095785810183015185820160",
    "40015282016106ed565b8181111561071a5783604083870101525b50601f0160",
    "1f1916929092016040019392505050565b60208082526023908201527f455243",
    "32303a207472616e7366657220746f20746865207a65726f2061646472604082",
    "01526265737360e81b606082015260800190565b60208082526022908201527f",
    "45524332303a20617070726f766520746f20746865207a65726f206164647265",
    "604082015261737360f01b606082015260800190565b60208082526026908201",
    "527f45524332303a207472616e7366657220616d6f756e742065786365656473",
    "2062604082015265616c616e636560d01b606082015260800190565b60208082",
    "526028908201527f45524332303a207472616e7366657220616d6f756e742065",
    "78636565647320616040820152676c6c6f77616e636560c01b60608201526080",
    "0190565b60208082526025908201527f45524332303a207472616e7366657220",
    "66726f6d20746865207a65726f206164604082015264647265737360d81b6060",
    "82015260800190565b60208082526024908201527f45524332303a2061707072",
    "6f76652066726f6d20746865207a65726f206164646040820152637265737360",
    "e01b606082015260800190565b60208082526025908201527f45524332303a20",
    "64656372656173656420616c6c6f77616e63652062656c6f7760408201526420",
    "7a65726f60d81b606082015260800190565b90815260200190565b60ff919091",
    "16815260200190565b6000821982111561094757634e487b7160e01b81526011",
    "600452602481fd5b500190565b60028104600182168061096057607f82169150",
    "5b6020821081141561098157634e487b7160e01b600052602260045260246000",
    "fd5b5091905056fea2646970667358221220dce3469df9bbc6af8b36a7047024",
    "a2509da1d09910cf2bdb5ec57acc4d7031b564736f6c63430008000033"
);
